//! Blog Post Service
//!
//! A Rust-based CRUD microservice for blog posts backed by MongoDB, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
