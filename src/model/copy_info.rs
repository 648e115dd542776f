use std::path::Path;

use super::{DestinationLocation, SourceLocation};

/// Both ends of a single avatar copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyInfo {
  source: SourceLocation,
  destination: DestinationLocation,
}

impl CopyInfo {
  pub fn new(source: SourceLocation, destination: DestinationLocation) -> Self {
    Self {
      source,
      destination,
    }
  }

  pub fn from_dirs<H: AsRef<Path>, P: AsRef<Path>>(home_dir: H, program_dir: P) -> Self {
    Self::new(
      SourceLocation::from_home(home_dir),
      DestinationLocation::from_program_dir(program_dir)
    )
  }

  pub fn source_file(&self) -> &Path {
    self.source.path()
  }

  pub fn destination_dir(&self) -> &Path {
    self.destination.dir()
  }

  pub fn destination_file(&self) -> &Path {
    self.destination.file()
  }
}
