use clap::Parser;

/// Copies avatar.png from your Desktop into the assets directory next to this program
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
   /// Verbose debug logging
   #[arg(long)]
   pub verbose: bool,
}

pub fn get_cli_args() -> Args {
  Args::parse()
}
