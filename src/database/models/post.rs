use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::error::PostError;

/// A post document. Likes and comments are embedded, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
    /// Revision counter, bumped by the store on every save
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub user: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a post; the store assigns id and date.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl Post {
    pub fn is_owned_by(&self, user: Uuid) -> bool {
        self.user == user
    }

    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    /// Prepend a like for `user`. A user may like a post at most once.
    pub fn add_like(&mut self, user: Uuid) -> Result<&[Like], PostError> {
        if self.is_liked_by(user) {
            return Err(PostError::Rejected("Post already liked".to_string()));
        }
        self.likes.insert(0, Like { id: Uuid::new_v4(), user });
        Ok(&self.likes)
    }

    pub fn remove_like(&mut self, user: Uuid) -> Result<&[Like], PostError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user == user)
            .ok_or_else(|| PostError::Rejected("Post has not yet been liked".to_string()))?;
        self.likes.remove(index);
        Ok(&self.likes)
    }

    pub fn add_comment(&mut self, comment: Comment) -> &[Comment] {
        self.comments.insert(0, comment);
        &self.comments
    }

    /// Remove the comment with `comment_id`, provided `caller` wrote it.
    ///
    /// The entry is located by comment id for both the authorization check and the
    /// removal, so a caller with several comments on the post only loses the one named.
    pub fn remove_comment(&mut self, comment_id: Uuid, caller: Uuid) -> Result<&[Comment], PostError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(|| PostError::NotFound("Comment does not exist".to_string()))?;

        if self.comments[index].user != caller {
            return Err(PostError::Authorization("User not authorized".to_string()));
        }

        self.comments.remove(index);
        Ok(&self.comments)
    }
}

impl Comment {
    pub fn new(user: Uuid, text: String, name: String, avatar: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            date: Utc::now(),
        }
    }
}
