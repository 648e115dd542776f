use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::model::{CopyError, CopyInfo, R};

/// Copies the Desktop avatar into the program's `assets` directory.
#[derive(Debug, Clone)]
pub struct AvatarCopy {
  copy_info: CopyInfo,
}

impl AvatarCopy {

  pub fn new(copy_info: CopyInfo) -> Self {
    Self {
      copy_info
    }
  }

  /// Runs the copy and returns the destination file on success.
  ///
  /// An existing destination is overwritten. Nothing is cleaned up on failure, so an interrupted
  /// copy may leave a partial destination file behind.
  pub fn copy(&self) -> R<PathBuf> {
    let source_file = self.copy_info.source_file();
    let destination_dir = self.copy_info.destination_dir();
    let destination_file = self.copy_info.destination_file();

    Self::create_destination_dir(destination_dir)?;
    let bytes_copied = Self::copy_file(source_file, destination_file)?;
    debug!("copied {} bytes from {} to {}", bytes_copied, source_file.display(), destination_file.display());

    if let Err(e) = Self::copy_file_times(source_file, destination_file) {
      warn!("could not copy file times to {}: {}", destination_file.display(), e);
    }

    Ok(destination_file.to_path_buf())
  }

  fn create_destination_dir(destination_dir: &Path) -> R<()> {
    debug!("ensuring destination directory {}", destination_dir.display());

    fs::create_dir_all(destination_dir)
      .map_err(|e| CopyError::other(e.to_string()))
  }

  // Permissions are carried over by fs::copy
  fn copy_file(source_file: &Path, destination_file: &Path) -> R<u64> {
    fs::copy(source_file, destination_file)
      .map_err(|e| CopyError::from_copy(source_file, e))
  }

  fn copy_file_times(source_file: &Path, destination_file: &Path) -> io::Result<()> {
    let source_meta = fs::metadata(source_file)?;

    let mut times = FileTimes::new().set_modified(source_meta.modified()?);
    if let Ok(accessed) = source_meta.accessed() {
      times = times.set_accessed(accessed);
    }

    Self::open_for_times(destination_file)?.set_times(times)
  }

  // The destination already carries the source's permissions and may be read-only
  #[cfg(unix)]
  fn open_for_times(destination_file: &Path) -> io::Result<File> {
    File::open(destination_file)
  }

  #[cfg(not(unix))]
  fn open_for_times(destination_file: &Path) -> io::Result<File> {
    File::options().write(true).open(destination_file)
  }
}
