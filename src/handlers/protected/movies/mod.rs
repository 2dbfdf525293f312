// handlers/protected/movies/mod.rs - Movie catalog handlers
//
// Collection routes live in `collection.rs` (GET/POST /movies), single-movie
// routes keyed by title in `record.rs` (GET/PUT/DELETE /movies/:title).

pub mod collection;
pub mod record;

pub use collection::{movies_get, movies_post};
pub use record::{movie_delete, movie_get, movie_put};
