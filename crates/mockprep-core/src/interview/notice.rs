use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Where the host should take the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "session_id", rename_all = "snake_case")]
pub enum Route {
    Review(SessionId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Review(id) => format!("/review/{id}"),
        }
    }
}

/// Transient, user-visible messages emitted by the interview flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum InterviewNotice {
    Info(String),
    Success(String),
    Error(String),
    Navigate(Route),
}
