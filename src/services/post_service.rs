use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::database::models::{Comment, Like, NewPost, Post, User};
use crate::database::store::{PostStore, UserStore};
use crate::services::error::PostError;
use crate::validation::validate_text;

/// Post controller. Holds no request state; every call is a read-modify-write
/// against the injected stores.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn UserStore>) -> Self {
        Self { posts, users }
    }

    pub async fn create(&self, caller: Uuid, text: String) -> Result<Post, PostError> {
        validate_text(&text).map_err(PostError::Validation)?;
        let user = self.caller_profile(caller).await?;

        let post = self
            .posts
            .insert(NewPost {
                user: caller,
                text,
                name: user.name,
                avatar: user.avatar,
            })
            .await?;

        info!("User {} created post {}", caller, post.id);
        Ok(post)
    }

    pub async fn list(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Post, PostError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| PostError::NotFound("Post not found".to_string()))
    }

    pub async fn delete(&self, caller: Uuid, id: &str) -> Result<(), PostError> {
        let post = self.get(id).await?;

        if !post.is_owned_by(caller) {
            warn!("User {} tried to delete post {} owned by {}", caller, post.id, post.user);
            return Err(PostError::Authorization("User not authorized".to_string()));
        }

        self.posts.delete(post.id).await?;
        info!("User {} deleted post {}", caller, post.id);
        Ok(())
    }

    pub async fn like(&self, caller: Uuid, id: &str) -> Result<Vec<Like>, PostError> {
        let mut post = self.get(id).await?;
        post.add_like(caller)?;

        let saved = self.posts.save(&post).await?;
        debug!("User {} liked post {}", caller, saved.id);
        Ok(saved.likes)
    }

    pub async fn unlike(&self, caller: Uuid, id: &str) -> Result<Vec<Like>, PostError> {
        let mut post = self.get(id).await?;
        post.remove_like(caller)?;

        let saved = self.posts.save(&post).await?;
        debug!("User {} unliked post {}", caller, saved.id);
        Ok(saved.likes)
    }

    pub async fn comment(&self, caller: Uuid, id: &str, text: String) -> Result<Vec<Comment>, PostError> {
        validate_text(&text).map_err(PostError::Validation)?;
        let mut post = self.get(id).await?;
        let user = self.caller_profile(caller).await?;

        post.add_comment(Comment::new(caller, text, user.name, user.avatar));

        let saved = self.posts.save(&post).await?;
        debug!("User {} commented on post {}", caller, saved.id);
        Ok(saved.comments)
    }

    pub async fn uncomment(&self, caller: Uuid, id: &str, comment_id: &str) -> Result<Vec<Comment>, PostError> {
        let mut post = self.get(id).await?;
        let comment_id = Uuid::parse_str(comment_id)
            .map_err(|_| PostError::NotFound("Comment does not exist".to_string()))?;

        let post_id = post.id;
        post.remove_comment(comment_id, caller).map_err(|err| {
            if matches!(err, PostError::Authorization(_)) {
                warn!("User {} tried to delete comment {} on post {}", caller, comment_id, post_id);
            }
            err
        })?;

        let saved = self.posts.save(&post).await?;
        debug!("User {} deleted comment {} on post {}", caller, comment_id, saved.id);
        Ok(saved.comments)
    }

    pub async fn health_check(&self) -> Result<(), PostError> {
        Ok(self.posts.ping().await?)
    }

    /// Name and avatar are copied from the caller's user record at write time
    async fn caller_profile(&self, caller: Uuid) -> Result<User, PostError> {
        self.users
            .find_user(caller)
            .await?
            .ok_or_else(|| PostError::Authorization("User not found".to_string()))
    }
}
