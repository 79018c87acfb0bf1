pub mod comment;
pub mod like;
pub mod post;

// Re-export handler functions for use in routing
pub use post::create as post_create;
pub use post::delete as post_delete;
pub use post::get as post_get;
pub use post::list as post_list;

pub use like::like as post_like;
pub use like::unlike as post_unlike;

pub use comment::create as comment_create;
pub use comment::delete as comment_delete;
