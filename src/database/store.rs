use async_trait::async_trait;
use uuid::Uuid;

use crate::database::error::StoreError;
use crate::database::models::{NewPost, NewUser, Post, User};

/// Document store for posts.
///
/// `save` writes the whole document back and only succeeds when the stored
/// `version` still equals `post.version`; the returned post carries the bumped version.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Look up a post by its textual id. Malformed ids yield `InvalidIdentifier`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// All posts, newest first
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    async fn save(&self, post: &Post) -> Result<Post, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Read side of the user directory, used to denormalize name and avatar.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError>;
}

pub fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}
