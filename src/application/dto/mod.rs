// src/application/dto/mod.rs
pub mod users;

pub use users::{RegisteredUserDto, UserDto};
