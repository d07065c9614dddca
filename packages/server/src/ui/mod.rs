//! HTTP interface of the chat room server.

mod error;
mod extractor;
mod handler;
mod runner;
mod signal;
pub mod state;
mod sweeper;

pub use error::ApiError;
pub use extractor::{CallerName, USER_HEADER};
pub use runner::{build_router, run, serve};
pub use sweeper::spawn_presence_sweeper;
