//! Core types and trait definitions for the activity signup directory.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod activity;
pub mod error;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
