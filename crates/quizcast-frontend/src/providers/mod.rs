//! Context providers for shared application state and services.

pub mod icons;
pub mod socket;

pub use icons::{IconRegistry, IconVariant};
pub use socket::{ConnectionState, ReceivedEvent, SocketConfig, SocketHandle, SocketProvider};
