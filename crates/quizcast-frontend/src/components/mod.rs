//! Reusable UI components for the quiz client.

pub mod chart;
pub mod connection_indicator;
pub mod hearts;
pub mod icon;

pub use chart::*;
pub use connection_indicator::*;
pub use hearts::*;
pub use icon::*;
