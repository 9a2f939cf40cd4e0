use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    entities::validation::{validate_hex_color, validate_slug, validate_timestamp, validate_url},
    listing::Pagination,
    utils::markdown::render_markdown_lite,
};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 120;
const MAX_EXCERPT_LENGTH: u64 = 300;

// ───── Store Models ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct BlogPost {
    pub id: u32,

    #[validate(length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,

    #[validate(custom(function = "validate_url"))]
    pub featured_image: String,

    pub category: Option<Category>,

    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<Tag>,

    #[validate(custom(function = "validate_timestamp"))]
    pub published_at: DateTime<Utc>,

    pub reading_time: u32,
    pub views: u64,
    pub author: Author,
}

impl BlogPost {
    /// Exact, case-sensitive comparison against the category slug.
    pub fn in_category(&self, category_slug: &str) -> bool {
        self.category
            .as_ref()
            .is_some_and(|c| c.slug == category_slug)
    }

    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }

    pub fn to_detail_response(&self) -> BlogPostDetailResponse {
        BlogPostDetailResponse {
            post: self.clone(),
            content_html: render_markdown_lite(&self.content),
        }
    }
}

fn validate_tags(tags: &[Tag]) -> Result<(), ValidationError> {
    for tag in tags {
        validate_slug(&tag.slug)?;
        validate_hex_color(&tag.color)?;
    }
    Ok(())
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub posts: Vec<BlogPost>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostDetailResponse {
    #[serde(flatten)]
    pub post: BlogPost,
    pub content_html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub post_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagSummary {
    pub name: String,
    pub slug: String,
    pub color: String,
    pub post_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagListResponse {
    pub tags: Vec<TagSummary>,
}

// ───── Aggregations ─────────────────────────────────────────────────

/// Distinct categories in order of first appearance, with post counts.
pub fn summarize_categories(posts: &[BlogPost]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for category in posts.iter().filter_map(|p| p.category.as_ref()) {
        match summaries.iter_mut().find(|s| s.slug == category.slug) {
            Some(existing) => existing.post_count += 1,
            None => summaries.push(CategorySummary {
                name: category.name.clone(),
                slug: category.slug.clone(),
                post_count: 1,
            }),
        }
    }

    summaries
}

/// Distinct tags in order of first appearance, with post counts.
pub fn summarize_tags(posts: &[BlogPost]) -> Vec<TagSummary> {
    let mut summaries: Vec<TagSummary> = Vec::new();

    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        match summaries.iter_mut().find(|s| s.slug == tag.slug) {
            Some(existing) => existing.post_count += 1,
            None => summaries.push(TagSummary {
                name: tag.name.clone(),
                slug: tag.slug.clone(),
                color: tag.color.clone(),
                post_count: 1,
            }),
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fixtures::blog_posts;

    #[test]
    fn fixtures_pass_validation() {
        for post in blog_posts() {
            assert!(post.validate().is_ok(), "post {} failed validation", post.slug);
        }
    }

    #[test]
    fn search_covers_title_excerpt_and_body() {
        let posts = blog_posts();
        let tailwind = &posts[1];

        assert!(tailwind.matches_search("tailwind"));
        assert!(tailwind.matches_search("best practices"));
        assert!(tailwind.matches_search("@apply"));
        assert!(!tailwind.matches_search("django"));
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let posts = blog_posts();
        assert!(posts[1].in_category("css"));
        assert!(!posts[1].in_category("CSS"));

        let mut uncategorized = posts[1].clone();
        uncategorized.category = None;
        assert!(!uncategorized.in_category("css"));
    }

    #[test]
    fn detail_response_renders_body() {
        let detail = blog_posts()[0].to_detail_response();
        assert!(detail.content_html.starts_with("<h1>Building Modern Web Applications"));
        assert!(detail.content_html.contains("<strong>React</strong>"));

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["slug"], "building-modern-web-applications-react-django");
        assert!(json["content_html"].is_string());
    }

    #[test]
    fn tag_validation_rejects_bad_colors() {
        let mut post = blog_posts()[0].clone();
        post.tags[0].color = "blue".into();
        assert!(post.validate().is_err());
    }

    #[test]
    fn summaries_count_by_first_appearance() {
        let posts = blog_posts();

        let categories = summarize_categories(&posts);
        let slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["web-development", "css", "javascript"]);
        assert!(categories.iter().all(|c| c.post_count == 1));

        let tags = summarize_tags(&posts);
        let react = tags.iter().find(|t| t.slug == "react").unwrap();
        assert_eq!(react.post_count, 2);
        assert_eq!(tags[0].slug, "react");
        assert_eq!(tags.len(), 8);
    }
}
