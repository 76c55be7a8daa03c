//! The shared library for Quizcast, a realtime multiplayer quiz game client.
//!
//! This crate carries everything the browser client and its tests agree on:
//! the game data structures and wire protocol, the declarative route table,
//! typed IDs, error handling, and logging.

pub mod data;
pub mod errors;
pub mod id;
pub mod log;
pub mod routes;

pub use serde;
pub use serde_json;
pub use tracing;
