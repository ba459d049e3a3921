//! Common test utilities for API tests
//!
//! Provides an in-memory repository, a failing repository, and a test
//! application wrapping the real router.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::Value;
use tower::util::ServiceExt;

use blog_post_service::domain::gateways::PostRepository;
use blog_post_service::domain::models::post::{CreatePostData, Post, PostId, UpdatePostData};
use blog_post_service::infrastructure::driving_adapters::api_rest::{app_router, AppState};
use blog_post_service::shared::errors::RepositoryError;

/// Repository keeping posts in insertion order, counting every call
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    calls: AtomicUsize,
}

impl InMemoryPostRepository {
    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, data: &CreatePostData) -> Result<Post, RepositoryError> {
        self.record_call();
        let post = Post::persisted(PostId::from_object_id(ObjectId::new()), data.clone());
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepositoryError> {
        self.record_call();
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        self.record_call();
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn update(&self, id: &PostId, data: &UpdatePostData) -> Result<bool, RepositoryError> {
        self.record_call();
        let mut posts = self.posts.lock().unwrap();
        match posts.iter().position(|p| p.id() == id) {
            Some(index) => {
                let existing = posts.remove(index);
                posts.insert(index, existing.with_updates(data.clone()));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<bool, RepositoryError> {
        self.record_call();
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id() != id);
        Ok(posts.len() < before)
    }
}

/// Repository whose every operation fails like an unreadable collection
pub struct FailingPostRepository;

fn storage_failure() -> RepositoryError {
    RepositoryError::Mapping("corrupt document in collection".to_string())
}

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn create(&self, _data: &CreatePostData) -> Result<Post, RepositoryError> {
        Err(storage_failure())
    }

    async fn find_by_id(&self, _id: &PostId) -> Result<Option<Post>, RepositoryError> {
        Err(storage_failure())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        Err(storage_failure())
    }

    async fn update(&self, _id: &PostId, _data: &UpdatePostData) -> Result<bool, RepositoryError> {
        Err(storage_failure())
    }

    async fn delete(&self, _id: &PostId) -> Result<bool, RepositoryError> {
        Err(storage_failure())
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryPostRepository>,
}

impl TestApp {
    /// Create a test application backed by an empty in-memory repository
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryPostRepository::default());
        let router = app_router(AppState::new(repository.clone()));
        Self { router, repository }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        send(&self.router, Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        send(&self.router, Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        send(&self.router, Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        send(&self.router, Method::DELETE, uri, None).await
    }

    /// Create a post through the API and return its id
    pub async fn create_post(&self, title: &str, content: &str) -> String {
        let response = self
            .post_json("/posts", &serde_json::json!({ "title": title, "content": content }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"].as_str().unwrap().to_string()
    }
}

/// Status, headers and parsed JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

/// Send a request through any router and collect the JSON response
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Post response structure for deserialization
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// True when `id` looks like a storage-assigned identifier
pub fn is_hex24(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}
