mod copy_error;
mod copy_info;
mod locations;

pub type R<A> = Result<A, CopyError>;

pub use copy_error::CopyError;
pub use copy_info::CopyInfo;
pub use locations::{DestinationLocation, SourceLocation, AVATAR_FILE_NAME};
