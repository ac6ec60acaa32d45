use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::ports::project_source::ProjectSource;
use crate::gitlab::{GitLabError, Project};
use crate::models::ProjectMetadata;

/// Page size of the project listing. A shorter page marks the end.
pub const PROJECTS_PER_PAGE: u32 = 30;

/// FetchService - walks every project visible to the token and builds
/// one `ProjectMetadata` per non-forked project.
///
/// Calls are issued one at a time, in listing order.
pub struct FetchService<S>
where
    S: ProjectSource,
{
    source: Arc<S>,
}

impl<S> FetchService<S>
where
    S: ProjectSource,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn fetch_all(&self) -> Result<Vec<ProjectMetadata>> {
        info!("get all project metadata[begin]");

        let user = self
            .source
            .authenticate()
            .await
            .context("Failed to authenticate against GitLab")?;
        info!("Authenticated as {}", user.username);

        let mut all_metadata = Vec::new();
        let mut page = 1u32;

        loop {
            info!("page number: {}", page);
            let projects = self
                .source
                .list_projects(page, PROJECTS_PER_PAGE)
                .await
                .with_context(|| format!("Failed to list projects (page {})", page))?;
            info!("projects number is: {}", projects.len());

            for project in &projects {
                if project.is_fork() {
                    debug!("Skipping fork {}", project.path_with_namespace);
                    continue;
                }
                all_metadata.push(self.fetch_project(project).await?);
            }

            if projects.len() < PROJECTS_PER_PAGE as usize {
                info!("get all project metadata[end]");
                break;
            }
            page += 1;
        }

        Ok(all_metadata)
    }

    async fn fetch_project(&self, project: &Project) -> Result<ProjectMetadata> {
        if project.statistics.is_none() {
            warn!(
                "No statistics returned for {}, commit count and size default to 0",
                project.path_with_namespace
            );
        }

        let mut metadata = ProjectMetadata::from_listing(project);

        match self.fill_repository_counts(project.id, &mut metadata).await {
            Ok(()) => {}
            Err(e) if e.is_missing_repository() => {
                debug!("{} has no repository: {}", project.path_with_namespace, e);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to fetch repository data for {}", project.path_with_namespace)
                });
            }
        }

        Ok(metadata)
    }

    /// Counts fetched before a failure are kept.
    async fn fill_repository_counts(
        &self,
        project_id: u64,
        metadata: &mut ProjectMetadata,
    ) -> Result<(), GitLabError> {
        metadata.branch_count = self.source.list_branches(project_id).await?.len() as u64;
        metadata.tag_count = self.source.list_tags(project_id).await?.len() as u64;
        metadata.contributors_count = self.source.list_contributors(project_id).await?.len() as u64;
        Ok(())
    }
}
