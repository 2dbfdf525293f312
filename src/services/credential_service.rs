use std::sync::Arc;
use thiserror::Error;

use crate::auth::{self, PasswordError};
use crate::database::models::{NewUser, User};
use crate::database::{DatabaseError, UserRepository};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Database(DatabaseError),
}

impl From<DatabaseError> for CredentialError {
    fn from(err: DatabaseError) -> Self {
        CredentialError::Database(err)
    }
}

/// Credential store: hashes passwords on the way in, verifies them on signin
#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    pub async fn create(
        &self,
        name: Option<String>,
        username: &str,
        password: &str,
    ) -> Result<User, CredentialError> {
        let password_hash = auth::hash_password(password.to_string(), self.bcrypt_cost).await?;

        let new_user = NewUser {
            name,
            username: username.to_string(),
            password_hash,
        };

        match self.users.create(new_user).await {
            Ok(user) => Ok(user),
            Err(DatabaseError::DuplicateKey(_)) => {
                Err(CredentialError::DuplicateUsername(username.to_string()))
            }
            Err(other) => Err(other.into()),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, CredentialError> {
        Ok(self.users.find_by_username(username).await?)
    }

    pub async fn verify_password(&self, user: &User, candidate: &str) -> Result<bool, CredentialError> {
        Ok(auth::verify_password(candidate.to_string(), user.password_hash.clone()).await?)
    }
}
