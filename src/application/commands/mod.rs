// src/application/commands/mod.rs
pub mod users;
