// src/infrastructure/repositories/in_memory_user.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, NewUser, User, UserId, UserRepository};
use async_trait::async_trait;
use std::sync::Mutex;

/// Process-local user store. Ids are assigned sequentially from 1 and email
/// uniqueness is enforced under the same lock as the insert.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> DomainError {
        DomainError::Persistence("user store lock poisoned".into())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().map_err(Self::poisoned)?;

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::conflict("email", "user already exists"));
        }

        let next_id = i64::try_from(users.len())
            .map_err(|_| DomainError::Persistence("user id space exhausted".into()))?
            + 1;
        let user = new_user.into_user(UserId::new(next_id)?);
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().map_err(Self::poisoned)?;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}
