//! Page components, one per route of the player, admin, and shared flows.

pub mod admin_home;
pub mod admin_question_settings;
pub mod admin_stats;
pub mod admin_waiting;
pub mod be_ready;
pub mod home;
pub mod leaderboard;
pub mod not_found;
pub mod quiz;
pub mod stats;
pub mod waiting;

pub use admin_home::*;
pub use admin_question_settings::*;
pub use admin_stats::*;
pub use admin_waiting::*;
pub use be_ready::*;
pub use home::*;
pub use leaderboard::*;
pub use not_found::*;
pub use quiz::*;
pub use stats::*;
pub use waiting::*;
