use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use validator::Validate;

use crate::{entities::blog_post::BlogPost, errors::AppError, repositories::fixtures};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Every published post, in store order.
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
}

/// Read-only post store built once at startup.
#[derive(Clone, Debug)]
pub struct StaticBlogPostRepo {
    posts: Arc<[BlogPost]>,
}

impl StaticBlogPostRepo {
    /// Validates every post and refuses duplicate slugs.
    pub fn new(posts: Vec<BlogPost>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(posts.len());

        for post in &posts {
            post.validate()?;
            if !seen.insert(post.slug.as_str()) {
                return Err(AppError::InternalError(format!("Duplicate post slug: {}", post.slug)));
            }
        }

        Ok(StaticBlogPostRepo { posts: posts.into() })
    }

    pub fn with_fixtures() -> Result<Self, AppError> {
        Self::new(fixtures::blog_posts())
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl BlogPostRepository for StaticBlogPostRepo {
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.posts.to_vec())
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }
}
