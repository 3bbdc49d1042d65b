//! Domain core for the school records service.
//!
//! Holds the shared id/timestamp types, the error taxonomy and the
//! per-resource payload validators. Nothing in here touches the database
//! or HTTP, so every rule can be unit tested in isolation.

pub mod course;
pub mod enrollment;
pub mod error;
pub mod messages;
pub mod student;
pub mod types;
pub mod validation;
