//! Handler modules for the HTTP endpoints.

pub mod http;
pub mod message;
pub mod participant;
pub mod status;

// Re-export handlers
pub use http::health_check;
pub use message::{delete_message, edit_message, get_messages, post_message};
pub use participant::{list_participants, register_participant};
pub use status::refresh_status;
