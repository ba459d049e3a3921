//! Use Cases
//!
//! Each use case is a single-purpose struct with an execute() method.

pub mod posts;

pub use posts::{
    CreatePostUseCase, DeletePostUseCase, GetAllPostsUseCase, GetPostByIdUseCase, UpdatePostUseCase,
};
