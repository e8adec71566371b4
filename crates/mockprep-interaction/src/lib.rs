//! HTTP adapters for the interview service.
//!
//! Implements the `mockprep-core` API traits on top of `reqwest`.

mod dto;
pub mod auth_api;
pub mod http_client;
pub mod interview_api;

#[cfg(test)]
mod test_server;

pub use auth_api::HttpAuthApi;
pub use http_client::ApiClient;
pub use interview_api::HttpInterviewApi;
