mod program_paths;

pub use program_paths::ProgramPaths;
