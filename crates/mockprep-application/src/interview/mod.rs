//! Stateful interview flow.
//!
//! `InterviewController` owns one attempt from load to review navigation.
//! Scenario tests live in `controller_test.rs`.

mod controller;
mod state;


pub use controller::{Advance, CompletionOutcome, InterviewController};
pub use state::InterviewSnapshot;
