use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Movie, MovieChanges, NewMovie, NewUser, User};
use crate::database::repository::{MovieRepository, UserRepository};

/// Process-local store for development runs and tests.
///
/// Mirrors the Postgres guarantees: unique usernames, insertion order for
/// listings, and the first inserted match for title lookups.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    movies: RwLock<Vec<Movie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, DatabaseError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(DatabaseError::DuplicateKey("users_username_key".to_string()));
        }

        let created = user.into_user(Uuid::new_v4());
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Movie>, DatabaseError> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.title == title).cloned())
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, DatabaseError> {
        let created = movie.into_movie(Uuid::new_v4());
        self.movies.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_by_title(
        &self,
        title: &str,
        changes: MovieChanges,
    ) -> Result<Option<Movie>, DatabaseError> {
        let mut movies = self.movies.write().await;
        let Some(movie) = movies.iter_mut().find(|m| m.title == title) else {
            return Ok(None);
        };

        changes.apply(movie);
        Ok(Some(movie.clone()))
    }

    async fn delete_by_title(&self, title: &str) -> Result<bool, DatabaseError> {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|m| m.title == title) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_movie(title: &str, genre: &str) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            release_date: "2020".to_string(),
            genre: genre.to_string(),
            actors: vec!["A".into(), "B".into(), "C".into()],
        }
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            name: Some("Test".to_string()),
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_usernames() {
        let store = MemoryStore::new();
        let first = UserRepository::create(&store, new_user("alice")).await.unwrap();

        let err = UserRepository::create(&store, new_user("alice")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::DuplicateKey(_)));

        let found = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn missing_user_is_none() {
        let store = MemoryStore::new();
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let store = MemoryStore::new();
        assert!(store.list_all().await.unwrap().is_empty());

        MovieRepository::create(&store, new_movie("B", "Drama")).await.unwrap();
        MovieRepository::create(&store, new_movie("A", "Drama")).await.unwrap();

        let titles: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn title_operations_target_first_inserted_match() {
        let store = MemoryStore::new();
        let first = MovieRepository::create(&store, new_movie("Twin", "Drama")).await.unwrap();
        let second = MovieRepository::create(&store, new_movie("Twin", "Horror")).await.unwrap();

        assert_eq!(store.find_by_title("Twin").await.unwrap().unwrap().id, first.id);

        let changes = MovieChanges {
            genre: Some("Comedy".to_string()),
            ..Default::default()
        };
        let updated = store.update_by_title("Twin", changes).await.unwrap().unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.genre, "Comedy");

        assert!(store.delete_by_title("Twin").await.unwrap());
        assert_eq!(store.find_by_title("Twin").await.unwrap().unwrap().id, second.id);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_titles() {
        let store = MemoryStore::new();
        assert!(store
            .update_by_title("Nope", MovieChanges::default())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_by_title("Nope").await.unwrap());
    }
}
