use crate::{
    entities::project::{Project, ProjectListResponse},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Active and completed projects, in store order
    pub async fn list_projects(&self) -> Result<ProjectListResponse, AppError> {
        let projects = self
            .project_repo
            .list_projects()
            .await?
            .into_iter()
            .filter(|p| p.status.is_listed())
            .collect();

        Ok(ProjectListResponse { projects })
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        self.project_repo
            .get_project_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::project::ProjectStatus,
        repositories::{fixtures::projects, project::MockProjectRepository},
    };

    #[tokio::test]
    async fn lists_every_fixture_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().returning(|| Ok(projects()));

        let response = ProjectHandler::new(repo).list_projects().await.unwrap();
        assert_eq!(response.projects.len(), 6);
        assert_eq!(response.projects.iter().filter(|p| p.featured).count(), 3);
    }

    #[tokio::test]
    async fn hides_archived_projects() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().returning(|| {
            let mut all = projects();
            all[0].status = ProjectStatus::Archived;
            Ok(all)
        });

        let response = ProjectHandler::new(repo).list_projects().await.unwrap();
        assert_eq!(response.projects.len(), 5);
        assert_eq!(response.projects[0].slug, "task-management-app");
    }

    #[tokio::test]
    async fn detail_by_slug() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_project_by_slug()
            .times(2)
            .returning(|slug| Ok(projects().into_iter().find(|p| p.slug == slug)));
        let handler = ProjectHandler::new(repo);

        let project = handler.get_project_by_slug("weather-dashboard").await.unwrap();
        assert_eq!(project.id, 3);

        let err = handler.get_project_by_slug("unknown").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
