use args::cli;
use workflow::CopyWorkflow;

mod args;
mod console;
mod copy;
mod logging;
mod model;
mod paths;
mod workflow;

fn main() {
  let args = cli::get_cli_args();
  logging::init(args.verbose);

  CopyWorkflow::new(args).run()
}
