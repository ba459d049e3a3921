//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod post;

pub use post::{CreatePostDto, MessageResponseDto, PostResponseDto, UpdatePostDto};
