use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Movie, MovieChanges, NewMovie, NewUser, User};

/// Persistence for accounts. Username uniqueness is enforced by the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account, failing with `DuplicateKey` if the username is taken
    async fn create(&self, user: NewUser) -> Result<User, DatabaseError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;
}

/// Persistence for the movie catalog.
///
/// Titles are lookup keys but carry no uniqueness constraint. When several
/// movies share a title, the title-based operations act on the earliest
/// inserted one.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// All movies in insertion order
    async fn list_all(&self) -> Result<Vec<Movie>, DatabaseError>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError>;

    async fn create(&self, movie: NewMovie) -> Result<Movie, DatabaseError>;

    /// Returns the updated record, or `None` when no movie has that title
    async fn update_by_title(
        &self,
        title: &str,
        changes: MovieChanges,
    ) -> Result<Option<Movie>, DatabaseError>;

    /// Returns whether a record was removed
    async fn delete_by_title(&self, title: &str) -> Result<bool, DatabaseError>;

    async fn ping(&self) -> Result<(), DatabaseError>;
}
