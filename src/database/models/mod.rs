pub mod post;
pub mod user;

pub use post::{Comment, Like, NewPost, Post};
pub use user::{NewUser, User};
