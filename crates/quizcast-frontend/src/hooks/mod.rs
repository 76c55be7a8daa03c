//! Custom hooks for borrowing the shared realtime connection.

pub mod use_socket;

pub use use_socket::{use_server_event, use_socket};
