use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use validator::Validate;

use crate::{entities::project::Project, errors::AppError, repositories::fixtures};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError>;
}

#[derive(Clone, Debug)]
pub struct StaticProjectRepo {
    projects: Arc<[Project]>,
}

impl StaticProjectRepo {
    pub fn new(projects: Vec<Project>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(projects.len());

        for project in &projects {
            project.validate()?;
            if !seen.insert(project.slug.as_str()) {
                return Err(AppError::InternalError(format!("Duplicate project slug: {}", project.slug)));
            }
        }

        Ok(StaticProjectRepo { projects: projects.into() })
    }

    pub fn with_fixtures() -> Result<Self, AppError> {
        Self::new(fixtures::projects())
    }
}

#[async_trait]
impl ProjectRepository for StaticProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.to_vec())
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects.iter().find(|p| p.slug == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_fixture_projects_in_order() {
        let repo = StaticProjectRepo::with_fixtures().unwrap();
        let slugs: Vec<_> = repo
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();

        assert_eq!(slugs.len(), 6);
        assert_eq!(slugs[0], "ecommerce-platform");
        assert_eq!(slugs[5], "chat-application");
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let mut projects = fixtures::projects();
        projects[2].slug = "ecommerce-platform".into();
        assert!(StaticProjectRepo::new(projects).is_err());
    }
}
