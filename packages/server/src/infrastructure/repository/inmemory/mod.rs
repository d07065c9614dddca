//! In-memory document store.
//!
//! Each collection is a `Vec` behind a `tokio::sync::Mutex`, locked for the
//! duration of a single call only. Insertion order is preserved.

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
