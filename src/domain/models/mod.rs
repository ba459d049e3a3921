//! Domain Models
//!
//! Pure domain entities and value objects.

pub mod post;

pub use post::{CreatePostData, Post, PostId, UpdatePostData};
