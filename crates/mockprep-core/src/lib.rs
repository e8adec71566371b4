//! Domain layer of the mockprep interview client.
//!
//! Models, error types, collaborator traits and the pure parts of the
//! interview flow. Nothing here performs I/O.

pub mod auth;
pub mod config;
pub mod error;
pub mod interview;
pub mod review;
pub mod session;

// Re-export common error type
pub use error::PrepError;
