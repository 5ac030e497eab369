//! In-memory implementations of the store, index and contacts directory.
//!
//! Backed by JSON fixtures; used by tests and the replay tool.

mod error;

pub mod contacts;
pub mod fixture;
pub mod index;
pub mod store;

pub use contacts::{ContactName, ContactsBook};
pub use error::{Error, Result};
pub use fixture::{Fixture, ForeignDocument};
pub use index::MemoryIndex;
pub use store::{MemoryStore, Snapshot};
