//! Blog list query: filtering, page windows and pagination metadata.

use std::num::{IntErrorKind, NonZeroU32};

use serde::{Deserialize, Serialize};

use crate::{entities::blog_post::BlogPost, errors::AppError};

/// Page-size bounds applied while normalizing list parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLimits {
    pub default_per_page: NonZeroU32,
    pub max_per_page: NonZeroU32,
}

const DEFAULT_PER_PAGE: NonZeroU32 = NonZeroU32::new(10).unwrap();
const MAX_PER_PAGE: NonZeroU32 = NonZeroU32::new(100).unwrap();

impl ListingLimits {
    /// Zero values fall back to the built-in 10/100.
    pub fn new(default_per_page: u32, max_per_page: u32) -> Self {
        let max_per_page = NonZeroU32::new(max_per_page).unwrap_or(MAX_PER_PAGE);
        let default_per_page = NonZeroU32::new(default_per_page)
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(max_per_page);

        ListingLimits { default_per_page, max_per_page }
    }
}

impl Default for ListingLimits {
    fn default() -> Self {
        ListingLimits::new(10, 100)
    }
}

/// Raw `GET /blog` query string, kept as text so that bad numbers can be
/// normalized instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl BlogListParams {
    /// Normalizes the raw parameters:
    /// - `page` missing, unparsable or below 1 becomes 1
    /// - `per_page` missing or unparsable takes the default, `<= 0` is
    ///   rejected, anything above the maximum is clamped
    /// - empty `category`/`search` count as absent
    pub fn into_query(self, limits: ListingLimits) -> Result<PostQuery, AppError> {
        let page = self
            .page
            .as_deref()
            .and_then(parse_saturating)
            .map_or(1, |p| p.clamp(1, i64::from(u32::MAX)) as u32);

        let per_page = match self.per_page.as_deref().and_then(parse_saturating) {
            None => limits.default_per_page,
            Some(n) if n <= 0 => {
                return Err(AppError::validation("per_page", "per_page must be a positive integer"));
            }
            Some(n) => {
                let capped = n.min(i64::from(limits.max_per_page.get())) as u32;
                NonZeroU32::new(capped).unwrap_or(limits.default_per_page)
            }
        };

        Ok(PostQuery {
            page,
            per_page,
            category: non_empty(self.category),
            search: non_empty(self.search).map(|s| s.to_lowercase()),
        })
    }
}

/// Integers too large for `i64` saturate instead of counting as unparsable,
/// so the sign of an oversized value still decides clamping or rejection.
fn parse_saturating(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A normalized list query. `search` is stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub page: u32,
    pub per_page: NonZeroU32,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl PostQuery {
    pub fn new(page: u32, per_page: NonZeroU32) -> Self {
        PostQuery {
            page: page.max(1),
            per_page,
            category: None,
            search: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_lowercase());
        self
    }

    /// Category filter, then search filter, keeping store order.
    pub fn filter<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts
            .iter()
            .filter(|post| self.category.as_deref().is_none_or(|c| post.in_category(c)))
            .filter(|post| self.search.as_deref().is_none_or(|s| post.matches_search(s)))
            .collect()
    }

    /// Filters, then cuts the `[start, start + per_page)` window.
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Page<&'a BlogPost> {
        let filtered = self.filter(posts);
        let pagination = Pagination::compute(filtered.len(), self.page, self.per_page);

        let items = filtered
            .into_iter()
            .skip(page_offset(self.page, self.per_page))
            .take(self.per_page.get() as usize)
            .collect();

        Page { items, pagination }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    pub fn compute(total: usize, page: u32, per_page: NonZeroU32) -> Self {
        let per_page_len = per_page.get() as usize;
        let end = page_offset(page, per_page).saturating_add(per_page_len);

        Pagination {
            current_page: page,
            total_pages: total.div_ceil(per_page_len),
            total_posts: total,
            has_next: end < total,
            has_previous: page > 1,
        }
    }
}

/// Zero-based offset of the first item on a 1-based `page`.
fn page_offset(page: u32, per_page: NonZeroU32) -> usize {
    let offset = u64::from(page.saturating_sub(1)) * u64::from(per_page.get());
    usize::try_from(offset).unwrap_or(usize::MAX)
}
