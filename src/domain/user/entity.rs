// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub avatar: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub avatar: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// A self-registered customer with no avatar yet.
    pub fn customer(
        first_name: String,
        last_name: String,
        email: Email,
        password_hash: PasswordHash,
        phone: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password_hash,
            avatar: String::new(),
            phone,
            role: Role::Customer,
            created_at,
        }
    }

    /// Attach the storage-assigned id; `updated_at` starts equal to `created_at`.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            avatar: self.avatar,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
