//! Dataset loading and trained-artifact persistence.

pub mod artifacts;
pub mod error;
pub mod loader;

pub use artifacts::ArtifactStore;
pub use error::DataError;
pub use loader::{load_dataset, read_dataset};
