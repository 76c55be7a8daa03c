//! Shared error types and utilities for the quizcast project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Faults of the realtime connection. None of these tear the client down;
/// they are logged and surfaced through the connection state instead.
#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to send event over the connection")]
    SendFailed,
    #[error("Not connected to the game server")]
    NotConnected,
}

/// Route table construction failures. These fire while the table is being
/// built at startup, never during navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteConfigError {
    #[error("Route {name} declares an empty path")]
    EmptyPath { name: String },
    #[error("Route {path} declares an empty name")]
    EmptyName { path: String },
    #[error("Duplicate route path {0}")]
    DuplicatePath(String),
    #[error("Duplicate route name {0}")]
    DuplicateName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("No route matches {path}")]
    NotFound { path: String },
}
