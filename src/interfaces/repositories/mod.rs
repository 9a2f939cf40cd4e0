pub mod blog_post;
pub mod contact;
pub mod fixtures;
pub mod project;
