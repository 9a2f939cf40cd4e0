use crate::{
    entities::blog_post::{
        summarize_categories, summarize_tags, BlogListResponse, BlogPostDetailResponse,
        CategoryListResponse, TagListResponse,
    },
    errors::AppError,
    listing::PostQuery,
    repositories::blog_post::BlogPostRepository,
};

pub struct BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    /// Filters and paginates the post store.
    pub async fn list_blog_posts(&self, query: &PostQuery) -> Result<BlogListResponse, AppError> {
        let posts = self.blog_post_repo.list_blog_posts().await?;
        let page = query.apply(&posts);

        tracing::debug!(
            page = query.page,
            per_page = query.per_page.get(),
            category = ?query.category,
            search = ?query.search,
            total = page.pagination.total_posts,
            "Listed blog posts"
        );

        Ok(BlogListResponse {
            posts: page.items.into_iter().cloned().collect(),
            pagination: page.pagination,
        })
    }

    /// Retrieves a single post with its rendered body
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPostDetailResponse, AppError> {
        self.blog_post_repo
            .get_blog_post_by_slug(slug)
            .await?
            .map(|post| post.to_detail_response())
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    pub async fn list_categories(&self) -> Result<CategoryListResponse, AppError> {
        let posts = self.blog_post_repo.list_blog_posts().await?;
        Ok(CategoryListResponse {
            categories: summarize_categories(&posts),
        })
    }

    pub async fn list_tags(&self) -> Result<TagListResponse, AppError> {
        let posts = self.blog_post_repo.list_blog_posts().await?;
        Ok(TagListResponse {
            tags: summarize_tags(&posts),
        })
    }
}
