//! In-memory backend for the activity directory.
//!
//! The whole directory lives behind one [`tokio::sync::RwLock`]; nothing is
//! written to disk and state is lost on restart.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
