//! Post Domain Model
//!
//! Represents a blog post stored in the document database.

use std::str::FromStr;

use bson::oid::ObjectId;

/// Newtype wrapper for Post ID providing type safety
///
/// Identifiers are assigned by the storage layer and exchanged with clients
/// as 24-character hexadecimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(ObjectId);

impl PostId {
    /// Create a PostId from an existing ObjectId
    #[must_use]
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Get the underlying ObjectId
    #[must_use]
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }

    /// Hexadecimal representation used on the wire
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<ObjectId> for PostId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for PostId {
    type Err = bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(ObjectId::parse_str(s)?))
    }
}

impl TryFrom<&str> for PostId {
    type Error = bson::oid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Data required to create a new Post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostData {
    pub title: String,
    pub content: String,
}

/// Replacement content for an existing Post (both fields are always overwritten)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostData {
    pub title: String,
    pub content: String,
}

/// Post domain entity
///
/// A `Post` always carries an identifier; data that has not been persisted
/// yet is represented by [`CreatePostData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
}

impl Post {
    /// Restore a Post from persisted data
    #[must_use]
    pub fn restore(id: PostId, title: String, content: String) -> Self {
        Self { id, title, content }
    }

    /// Build the persisted form of freshly created data once storage has assigned an id
    #[must_use]
    pub fn persisted(id: PostId, data: CreatePostData) -> Self {
        Self::restore(id, data.title, data.content)
    }

    /// Apply updates to the post, returning a new instance. The id never changes.
    #[must_use]
    pub fn with_updates(self, data: UpdatePostData) -> Self {
        Self {
            id: self.id,
            title: data.title,
            content: data.content,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PostId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
