//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Document database repository
//! - Database client construction
//! - Configuration

pub mod config;
pub mod database;
pub mod post_repository;

pub use config::AppConfig;
pub use post_repository::MongoPostRepository;
