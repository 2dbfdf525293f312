// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (JWT auth). The tier decides which router the
// handler is mounted on; the JWT stage is applied per router, not per handler.
pub mod public;    // Signup, signin and service endpoints
pub mod protected; // Movie catalog, requires `Authorization: JWT <token>`
