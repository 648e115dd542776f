use std::path::PathBuf;

use log::debug;

use crate::cli::Args;
use crate::console::AvatarConsole;
use crate::copy::AvatarCopy;
use crate::model::R;
use crate::paths::ProgramPaths;

pub struct CopyWorkflow {
  args: Args
}

impl CopyWorkflow {

  pub fn new(args: Args) -> Self {
    Self {
      args
    }
  }

  /// Copies the avatar and reports the outcome. Failures are printed, never returned.
  pub fn run(self) {
    debug!("running with {:?}", self.args);

    let result = ProgramPaths::resolve().and_then(|paths| Self::copy_avatar(&paths));
    AvatarConsole::show_copy_result(&result)
  }

  fn copy_avatar(paths: &ProgramPaths) -> R<PathBuf> {
    let copy_info = paths.copy_info();
    debug!("source: {}", copy_info.source_file().display());
    debug!("destination: {}", copy_info.destination_file().display());

    AvatarCopy::new(copy_info).copy()
  }
}
