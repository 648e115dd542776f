use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::AVATAR_FILE_NAME;

/// The two ways a copy can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CopyError {
  /// The avatar was not on the Desktop when the copy ran
  SourceNotFound(PathBuf),
  /// Everything else, carrying the description of the underlying failure
  Other(String),
}

impl CopyError {

  pub fn source_not_found<P: AsRef<Path>>(source_file: P) -> Self {
    CopyError::SourceNotFound(source_file.as_ref().to_path_buf())
  }

  pub fn other<S: Into<String>>(message: S) -> Self {
    CopyError::Other(message.into())
  }

  /// Classifies an error raised while copying the file itself.
  pub fn from_copy<P: AsRef<Path>>(source_file: P, error: io::Error) -> Self {
    match error.kind() {
      io::ErrorKind::NotFound => Self::source_not_found(source_file),
      _ => Self::other(error.to_string()),
    }
  }

  pub fn message(&self) -> String {
    match self {
      CopyError::SourceNotFound(_) => format!("{} was not found on the Desktop", AVATAR_FILE_NAME),
      CopyError::Other(reason) => reason.clone(),
    }
  }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for CopyError {}
