use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::error::StoreError;
use crate::database::models::{NewPost, NewUser, Post, User};
use crate::database::store::{parse_id, PostStore, UserStore};

/// In-process store backed by hash maps. Cloning shares the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn post_count(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let post = Post {
            id: Uuid::new_v4(),
            user: new_post.user,
            text: new_post.text,
            name: new_post.name,
            avatar: new_post.avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
            version: 0,
        };
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn save(&self, post: &Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let stored = posts
            .get_mut(&post.id)
            .ok_or_else(|| StoreError::NotFound(format!("post {}", post.id)))?;

        if stored.version != post.version {
            return Err(StoreError::Conflict(format!("post {}", post.id)));
        }

        let mut updated = post.clone();
        updated.version += 1;
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        match self.posts.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(format!("post {}", id))),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            avatar: new_user.avatar,
            date: Utc::now(),
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }
}
