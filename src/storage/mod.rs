//! Local key-value persistence.
//!
//! All values live in one JSON object file under the platform data
//! directory. Keys map to string values, mirroring a device key-value store.

mod error;
mod store;

pub use error::StorageError;
pub use store::{FileStore, KeyValueStore, data_dir};
