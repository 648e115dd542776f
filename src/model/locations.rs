use std::path::{Path, PathBuf};

pub const DESKTOP_DIR: &str = "Desktop";
pub const ASSETS_DIR: &str = "assets";
pub const AVATAR_FILE_NAME: &str = "avatar.png";

/// Where the avatar is read from: `<home>/Desktop/avatar.png`.
///
/// The path is not checked for existence; a missing file only surfaces when the copy runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLocation(PathBuf);

impl SourceLocation {

  pub fn from_home<H: AsRef<Path>>(home_dir: H) -> Self {
    Self(
      home_dir
        .as_ref()
        .join(DESKTOP_DIR)
        .join(AVATAR_FILE_NAME)
    )
  }

  pub fn path(&self) -> &Path {
    self.0.as_path()
  }
}

/// Where the avatar is written to: `<program dir>/assets/avatar.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationLocation {
  dir: PathBuf,
  file: PathBuf,
}

impl DestinationLocation {

  pub fn from_program_dir<P: AsRef<Path>>(program_dir: P) -> Self {
    let dir = program_dir.as_ref().join(ASSETS_DIR);
    let file = dir.join(AVATAR_FILE_NAME);

    Self {
      dir,
      file
    }
  }

  /// The `assets` directory, created on demand
  pub fn dir(&self) -> &Path {
    self.dir.as_path()
  }

  pub fn file(&self) -> &Path {
    self.file.as_path()
  }
}
