use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::{
    models::user::{CreateUserRequest, User},
    validation::{Validate, ValidationErrors},
};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Validation error: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("Username already taken: {0}")]
    UsernameTaken(String),
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

struct Accounts {
    next_id: i64,
    by_id: BTreeMap<i64, User>,
}

/// Administrator accounts, keyed by unique username.
pub struct UserDirectory {
    cost: u32,
    inner: RwLock<Accounts>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Directory hashing with the given bcrypt cost.
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost,
            inner: RwLock::new(Accounts { next_id: 1, by_id: BTreeMap::new() }),
        }
    }

    pub async fn create(&self, req: &CreateUserRequest) -> Result<User, UserError> {
        req.validate()?;
        let username = req.username.trim().to_string();
        let password_hash = bcrypt::hash(&req.password, self.cost)?;

        let mut accounts = self.inner.write().await;
        if accounts.by_id.values().any(|u| u.username.eq_ignore_ascii_case(&username)) {
            return Err(UserError::UsernameTaken(username));
        }
        let id = accounts.next_id;
        accounts.next_id += 1;
        let user = User { id, username, password_hash, created_at: Utc::now() };
        accounts.by_id.insert(id, user.clone());
        Ok(user)
    }

    pub async fn get(&self, id: i64) -> Option<User> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        let username = username.trim();
        self.inner
            .read()
            .await
            .by_id
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned()
    }

    /// Returns the account when `password` matches its stored hash.
    pub async fn verify(&self, username: &str, password: &str) -> Result<Option<User>, UserError> {
        let Some(user) = self.find_by_username(username).await else {
            return Ok(None);
        };
        if bcrypt::verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.by_id.len()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
