use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Movie, MovieChanges, NewMovie, NewUser, User};
use crate::database::repository::{MovieRepository, UserRepository};

const MOVIE_COLUMNS: &str = "id, title, release_date, genre, actors";

/// Earliest inserted movie with the given title
const FIRST_BY_TITLE: &str =
    "SELECT id FROM movies WHERE title = $1 ORDER BY created_at, id LIMIT 1";

/// Postgres-backed credential and catalog store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn create(&self, user: NewUser) -> Result<User, DatabaseError> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, username, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, username, password_hash",
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl MovieRepository for PgStore {
    async fn list_all(&self) -> Result<Vec<Movie>, DatabaseError> {
        let sql = format!("SELECT {} FROM movies ORDER BY created_at, id", MOVIE_COLUMNS);
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(movies)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM movies WHERE title = $1 ORDER BY created_at, id LIMIT 1",
            MOVIE_COLUMNS
        );
        let movie = sqlx::query_as::<_, Movie>(&sql)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(movie)
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, DatabaseError> {
        let sql = format!(
            "INSERT INTO movies ({}) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            MOVIE_COLUMNS, MOVIE_COLUMNS
        );
        let created = sqlx::query_as::<_, Movie>(&sql)
            .bind(Uuid::new_v4())
            .bind(&movie.title)
            .bind(&movie.release_date)
            .bind(&movie.genre)
            .bind(&movie.actors)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update_by_title(
        &self,
        title: &str,
        changes: MovieChanges,
    ) -> Result<Option<Movie>, DatabaseError> {
        let sql = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                release_date = COALESCE($3, release_date),
                genre = COALESCE($4, genre),
                actors = COALESCE($5, actors)
             WHERE id = ({})
             RETURNING {}",
            FIRST_BY_TITLE, MOVIE_COLUMNS
        );
        let updated = sqlx::query_as::<_, Movie>(&sql)
            .bind(title)
            .bind(changes.title)
            .bind(changes.release_date)
            .bind(changes.genre)
            .bind(changes.actors)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete_by_title(&self, title: &str) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM movies WHERE id = ({})", FIRST_BY_TITLE);
        let result = sqlx::query(&sql).bind(title).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
