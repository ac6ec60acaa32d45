use serde::{Deserialize, Serialize};

use crate::gitlab::Project;

/// Ranking record for one non-forked project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub path_with_namespace: String,
    pub http_url_to_repo: String,
    pub commit_count: u64,
    pub branch_count: u64,
    pub tag_count: u64,
    pub contributors_count: u64,
    pub forks_count: u64,
    /// Bytes
    pub repository_size: u64,
    /// ISO-8601, as returned by GitLab
    pub last_activity_at: String,
}

impl ProjectMetadata {
    /// Fields available straight from the listing payload. Repository-backed
    /// counts start at zero.
    pub fn from_listing(project: &Project) -> Self {
        let stats = project.statistics.clone().unwrap_or_default();
        Self {
            path_with_namespace: project.path_with_namespace.clone(),
            http_url_to_repo: project.http_url_to_repo.clone(),
            commit_count: stats.commit_count,
            branch_count: 0,
            tag_count: 0,
            contributors_count: 0,
            forks_count: project.forks_count,
            repository_size: stats.repository_size,
            last_activity_at: project.last_activity_at.clone(),
        }
    }
}

impl std::fmt::Display for ProjectMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "project metadata:{{ path_with_namespace: '{}'  http_url_to_repo: '{}' ,commit_count: {} ,branch_count: {} ,tag_count: {} ,contributors_count: {} ,forks_count: {} ,repository_size: {} last_activity_at: {} }}",
            self.path_with_namespace,
            self.http_url_to_repo,
            self.commit_count,
            self.branch_count,
            self.tag_count,
            self.contributors_count,
            self.forks_count,
            self.repository_size,
            self.last_activity_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::ProjectStatistics;

    fn listing(statistics: Option<ProjectStatistics>) -> Project {
        Project {
            id: 1,
            path_with_namespace: "infra/deploy".to_string(),
            http_url_to_repo: "https://gitlab.example.com/infra/deploy.git".to_string(),
            forks_count: 4,
            last_activity_at: "2020-02-26T09:55:47.215Z".to_string(),
            statistics,
            forked_from_project: None,
        }
    }

    #[test]
    fn test_from_listing_copies_statistics() {
        let metadata = ProjectMetadata::from_listing(&listing(Some(ProjectStatistics {
            commit_count: 42,
            repository_size: 2048,
        })));

        assert_eq!(metadata.commit_count, 42);
        assert_eq!(metadata.repository_size, 2048);
        assert_eq!(metadata.forks_count, 4);
        assert_eq!(metadata.branch_count, 0);
    }

    #[test]
    fn test_from_listing_without_statistics() {
        let metadata = ProjectMetadata::from_listing(&listing(None));

        assert_eq!(metadata.commit_count, 0);
        assert_eq!(metadata.repository_size, 0);
    }

    #[test]
    fn test_display_single_line() {
        let metadata = ProjectMetadata {
            path_with_namespace: "infra/deploy".to_string(),
            http_url_to_repo: "https://gitlab.example.com/infra/deploy.git".to_string(),
            commit_count: 10,
            branch_count: 2,
            tag_count: 1,
            contributors_count: 3,
            forks_count: 0,
            repository_size: 1024,
            last_activity_at: "2020-02-26T09:55:47.215Z".to_string(),
        };

        let line = metadata.to_string();
        assert!(line.starts_with("project metadata:{ path_with_namespace: 'infra/deploy'"));
        assert!(line.contains(",branch_count: 2 ,"));
        assert!(line.ends_with("last_activity_at: 2020-02-26T09:55:47.215Z }"));
        assert!(!line.contains('\n'));
    }
}
