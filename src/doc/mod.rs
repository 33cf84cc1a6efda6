pub mod loader;
pub mod watcher;

pub use loader::{load_document, parse_document, sample_document, DocError};
