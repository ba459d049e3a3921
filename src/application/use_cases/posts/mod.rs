//! Post Use Cases

mod create_post;
mod delete_post;
mod get_all_posts;
mod get_post_by_id;
mod update_post;

pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use get_all_posts::GetAllPostsUseCase;
pub use get_post_by_id::GetPostByIdUseCase;
pub use update_post::UpdatePostUseCase;
