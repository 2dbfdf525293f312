// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route here sits behind `jwt_auth_middleware`, so handlers can take an
// `Extension<AuthUser>` and the store is never reached without a valid token.

pub mod movies;

pub use movies::*;
