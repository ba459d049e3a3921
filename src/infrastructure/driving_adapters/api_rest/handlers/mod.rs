//! HTTP Handlers

pub mod fallback;
pub mod health;
pub mod posts;
