use std::path::Path;

use console::style;

use crate::model::{CopyError, R};

pub struct AvatarConsole;

impl AvatarConsole {

  /// Prints the outcome of a copy to stdout. Colours are only used on a terminal.
  pub fn show_copy_result<P: AsRef<Path>>(result: &R<P>) {
    let message = Self::copy_result_message(result);
    match result {
      Ok(_) => println!("{}", style(message).green()),
      Err(_) => println!("{}", style(message).red()),
    }
  }

  pub fn copy_result_message<P: AsRef<Path>>(result: &R<P>) -> String {
    match result {
      Ok(destination_file) => format!("Avatar copied successfully to {}", destination_file.as_ref().display()),
      Err(e @ CopyError::SourceNotFound(_)) => format!("Error: {}", e),
      Err(e @ CopyError::Other(_)) => format!("An error occurred while copying: {}", e),
    }
  }
}
