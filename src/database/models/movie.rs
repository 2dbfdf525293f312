use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_date: String,
    pub genre: String,
    pub actors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub release_date: String,
    pub genre: String,
    pub actors: Vec<String>,
}

impl NewMovie {
    pub fn into_movie(self, id: Uuid) -> Movie {
        Movie {
            id,
            title: self.title,
            release_date: self.release_date,
            genre: self.genre,
            actors: self.actors,
        }
    }
}

/// Partial update: every `Some` field replaces the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieChanges {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub genre: Option<String>,
    pub actors: Option<Vec<String>>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.release_date.is_none()
            && self.genre.is_none()
            && self.actors.is_none()
    }

    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(release_date) = self.release_date {
            movie.release_date = release_date;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(actors) = self.actors {
            movie.actors = actors;
        }
    }
}
