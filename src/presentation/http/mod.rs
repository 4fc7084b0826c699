// src/presentation/http/mod.rs
pub mod boundary;
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
pub mod validation;
