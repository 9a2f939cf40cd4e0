pub mod blog;
pub mod contact;
pub mod project;
