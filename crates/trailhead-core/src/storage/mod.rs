//! Local key-value storage backends for session persistence.
//!
//! This module provides:
//! - `KeyValueStore`: the async storage contract the session container
//!   persists through
//! - `FileStore`: one file per key under a data directory
//! - `KeyringStore`: entries in the OS keychain via keyring
//! - `MemoryStore`: map-backed store for tests and ephemeral runs
//!
//! All backends treat absent keys as `None` on reads and as a success on
//! removal, so callers stay idempotent.

pub mod error;
pub mod file;
pub mod keychain;
pub mod memory;
pub mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use keychain::KeyringStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
