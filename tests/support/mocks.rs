// tests/support/mocks.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use restaurant_core::application::{ApplicationResult, error::ApplicationError, ports::security::PasswordHasher};
use restaurant_core::domain::errors::{DomainError, DomainResult};
use restaurant_core::domain::user::{Email, NewUser, User, UserRepository};

/// Cheap readable "hash" so tests do not pay for Argon2.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }
}

/// Hasher whose backend is down.
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }
}

/// Repository whose storage is unreachable.
pub struct FailingUserRepo;

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_email(&self, _email: &Email) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// Repository that never sees an existing user but loses the insert race,
/// the way a unique index would report it.
#[derive(Default)]
pub struct RacingUserRepo {
    pub inserts: AtomicUsize,
}

#[async_trait]
impl UserRepository for RacingUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::conflict("email", "user already exists"))
    }

    async fn find_by_email(&self, _email: &Email) -> DomainResult<Option<User>> {
        Ok(None)
    }
}
