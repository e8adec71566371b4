pub mod auth;
pub mod interview;
pub mod review;
pub mod start;
pub mod utils;
