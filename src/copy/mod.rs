mod avatar_copy;

pub use avatar_copy::AvatarCopy;
