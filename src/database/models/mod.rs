pub mod movie;
pub mod user;

pub use movie::{Movie, MovieChanges, NewMovie};
pub use user::{NewUser, User};
