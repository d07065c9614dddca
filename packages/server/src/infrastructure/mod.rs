//! Infrastructure 層
//!
//! Store adapters and wire DTOs.

pub mod dto;
pub mod repository;
