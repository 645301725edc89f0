mod fs;
pub mod json;
pub mod path;

pub use fs::{FileSystem, InMemoryFs, LocalFs};
