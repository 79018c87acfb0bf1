pub mod error;
pub mod post_service;

pub use error::PostError;
pub use post_service::PostService;
