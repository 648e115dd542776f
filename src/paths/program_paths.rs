use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::model::{CopyError, CopyInfo, R};

/// The two directories a copy is anchored on, resolved from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramPaths {
  home_dir: PathBuf,
  program_dir: PathBuf,
}

impl ProgramPaths {

  pub fn new<H: AsRef<Path>, P: AsRef<Path>>(home_dir: H, program_dir: P) -> Self {
    Self {
      home_dir: home_dir.as_ref().to_path_buf(),
      program_dir: program_dir.as_ref().to_path_buf(),
    }
  }

  pub fn resolve() -> R<Self> {
    let home_dir = Self::home_dir()?;
    let program_dir = Self::program_dir()?;

    debug!("home directory: {}", home_dir.display());
    debug!("program directory: {}", program_dir.display());

    Ok(Self::new(home_dir, program_dir))
  }

  pub fn copy_info(&self) -> CopyInfo {
    CopyInfo::from_dirs(&self.home_dir, &self.program_dir)
  }

  fn home_dir() -> R<PathBuf> {
    dirs::home_dir()
      .ok_or_else(|| CopyError::other("Could not determine the home directory of the current user"))
  }

  /// Directory holding the running executable, with symlinks resolved.
  fn program_dir() -> R<PathBuf> {
    let exe =
      env::current_exe()
        .and_then(fs::canonicalize)
        .map_err(|e| CopyError::other(format!("Could not locate the running program: {e}")))?;

    exe
      .parent()
      .map(Path::to_path_buf)
      .ok_or_else(|| CopyError::other(format!("Program path has no parent directory: {}", exe.display())))
  }
}
