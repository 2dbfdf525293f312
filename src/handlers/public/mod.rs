// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition plus the service root and health probe.
// Security Level: None (completely public access)

pub mod auth;
pub mod system;

pub use auth::{signin_post, signup_post};
pub use system::{health_get, root_get};
