use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Sends diagnostics to stderr so stdout only carries the copy result.
///
/// `RUST_LOG` takes precedence over the `--verbose` default.
pub fn init(verbose: bool) {
  let default_level =
    if verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Warn
    };

  let _ =
    Builder::new()
      .filter_level(default_level)
      .parse_env(Env::default())
      .target(Target::Stderr)
      .format(|buf, record| {
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(buf, "{:8} {}", level, record.args())
      })
      .try_init();
}
