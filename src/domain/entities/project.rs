use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::{validate_slug, validate_timestamp, validate_url};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Active,
    Archived,
}

impl ProjectStatus {
    /// Whether projects in this status appear in the public listing.
    pub fn is_listed(self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Active)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Project {
    pub id: u32,

    #[validate(length(min = 1, max = 120))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = 160))]
    pub short_description: String,

    #[validate(custom(function = "validate_url"))]
    pub image: String,

    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    pub featured: bool,
    #[validate(custom(function = "validate_timestamp"))]
    pub created_at: DateTime<Utc>,

    #[validate(custom(function = "validate_timestamp"))]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fixtures::projects;

    #[test]
    fn fixtures_pass_validation() {
        for project in projects() {
            assert!(project.validate().is_ok(), "project {} failed validation", project.slug);
        }
    }

    #[test]
    fn archived_projects_are_not_listed() {
        assert!(ProjectStatus::Active.is_listed());
        assert!(ProjectStatus::Completed.is_listed());
        assert!(!ProjectStatus::Archived.is_listed());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ProjectStatus::Completed).unwrap(), "\"completed\"");
        let status: ProjectStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, ProjectStatus::Active);
    }

    #[test]
    fn rejects_non_http_links() {
        let mut project = projects()[0].clone();
        project.github_url = Some("git@github.com:someone/repo.git".into());
        assert!(project.validate().is_err());

        project.github_url = None;
        assert!(project.validate().is_ok());
    }
}
