//! Domain Layer
//!
//! Contains the core business types and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::post_repository::PostRepository;
pub use models::post::{CreatePostData, Post, PostId, UpdatePostData};
