mod avatar_console;

pub use avatar_console::AvatarConsole;
