//! Application layer for mockprep.
//!
//! Use cases and the interview controller, built on the traits from
//! `mockprep-core`. Transport and storage are injected by the caller.

pub mod auth_usecase;
pub mod interview;
pub mod review_usecase;
pub mod start_usecase;

pub use auth_usecase::AuthUseCase;
pub use interview::{Advance, CompletionOutcome, InterviewController, InterviewSnapshot};
pub use review_usecase::ReviewUseCase;
pub use start_usecase::StartInterviewUseCase;
