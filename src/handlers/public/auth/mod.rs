// handlers/public/auth/mod.rs - Public authentication handlers
//
// Account creation and token acquisition. Neither route requires a token.

pub mod signin; // POST /signin - verify credentials and issue a JWT
pub mod signup; // POST /signup - create a new account

pub use signin::signin_post;
pub use signup::signup_post;

/// Treat absent and blank strings the same way
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
