//! Polling chat room server.
//!
//! Participants register a name, post broadcast or private messages, poll
//! the history visible to them and are removed after a period of inactivity.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{PresenceConfig, ServerConfig};
pub use ui::run as run_server;
