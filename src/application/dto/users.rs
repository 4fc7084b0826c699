// src/application/dto/users.rs
use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public projection of a user. The password hash has no field here, so it
/// cannot leak into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email.into(),
            phone: user.phone,
            avatar: user.avatar,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUserDto {
    pub user: UserDto,
    pub message: String,
}

impl RegisteredUserDto {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
            message: "User registered successfully".into(),
        }
    }
}
