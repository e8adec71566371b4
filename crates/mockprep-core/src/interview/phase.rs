use serde::{Deserialize, Serialize};
use strum::Display;

/// Lifecycle of one interview attempt.
///
/// ```text
/// Loading ──► Ready ◄──► Completing ──► Done
///    │
///    └──► LoadFailed
/// ```
///
/// `Ready` is re-entrant across navigation, answer buffering and follow-ups.
/// `Completing` falls back to `Ready` when submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Loading,
    Ready,
    Completing,
    Done,
    LoadFailed,
}
