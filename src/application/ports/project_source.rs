use async_trait::async_trait;

use crate::gitlab::{Branch, Contributor, GitLabError, Project, Tag, User};

/// Read-only view of a GitLab instance used by the fetch loop
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Verify the token and return the authenticated user
    async fn authenticate(&self) -> Result<User, GitLabError>;

    /// One page of the project listing, statistics included
    async fn list_projects(&self, page: u32, per_page: u32) -> Result<Vec<Project>, GitLabError>;

    /// All branches of a project
    async fn list_branches(&self, project_id: u64) -> Result<Vec<Branch>, GitLabError>;

    /// All tags of a project
    async fn list_tags(&self, project_id: u64) -> Result<Vec<Tag>, GitLabError>;

    /// All contributors of a project
    async fn list_contributors(&self, project_id: u64) -> Result<Vec<Contributor>, GitLabError>;
}
