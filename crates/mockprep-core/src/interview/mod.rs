//! Interview domain module.
//!
//! Pure building blocks of a timed interview attempt. The stateful controller
//! that drives them lives in `mockprep-application`.
//!
//! - `phase`: attempt lifecycle (`Phase`)
//! - `selection`: which questions an attempt shows
//! - `timer`: countdown and urgency
//! - `notice`: user-visible messages and navigation
//! - `error`: operation failures (`InterviewError`)

mod error;
mod notice;
mod phase;
mod selection;
mod timer;

pub use error::{CompletionStage, InterviewError};
pub use notice::{InterviewNotice, Route};
pub use phase::Phase;
pub use selection::{progress_percent, select_active_questions};
pub use timer::{Countdown, Tick, Urgency, format_clock};
