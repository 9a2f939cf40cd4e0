mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, listing, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{telemetry, utils, web};

use listing::ListingLimits;
use repositories::{blog_post::StaticBlogPostRepo, contact::LogContactRepo, project::StaticProjectRepo};
use use_cases::{blog::BlogPostHandler, contact::ContactHandler, project::ProjectHandler};

pub struct AppState {
    pub blog_handler: AppBlogHandler,
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub listing_limits: ListingLimits,
}

pub type AppBlogHandler = BlogPostHandler<StaticBlogPostRepo>;
pub type AppProjectHandler = ProjectHandler<StaticProjectRepo>;
pub type AppContactHandler = ContactHandler<LogContactRepo>;

impl AppState {
    /// Builds the stores from the bundled fixtures.
    pub fn new(config: &settings::AppConfig) -> Result<Self, errors::AppError> {
        let blog_post_repo = StaticBlogPostRepo::with_fixtures()?;
        let project_repo = StaticProjectRepo::with_fixtures()?;

        tracing::info!(posts = blog_post_repo.len(), "Loaded content stores");

        Ok(AppState {
            blog_handler: BlogPostHandler::new(blog_post_repo),
            project_handler: ProjectHandler::new(project_repo),
            contact_handler: ContactHandler::new(LogContactRepo),
            listing_limits: ListingLimits::new(config.default_per_page, config.max_per_page),
        })
    }
}
