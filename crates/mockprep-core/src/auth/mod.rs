//! Authentication domain module.
//!
//! - `model`: the signed-in user (`AuthContext`, `UserRole`, `TokenStatus`)
//! - `credentials`: login/registration input checks
//! - `api`: remote auth operations (`AuthApi`)
//! - `store`: local persistence of the signed-in user (`AuthStore`)

mod api;
mod credentials;
mod model;
mod store;

pub use api::AuthApi;
pub use credentials::{Credentials, is_strong_password};
pub use model::{AuthContext, TokenStatus, UserRole};
pub use store::AuthStore;
