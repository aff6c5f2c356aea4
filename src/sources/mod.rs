pub mod json_file;
pub mod traits;

pub use json_file::{BundledSource, JsonFileSource};
pub use traits::PropertySource;
