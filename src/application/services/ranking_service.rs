use crate::models::ProjectMetadata;

/// Number of projects kept in the report.
pub const TOP_N: usize = 100;

/// Largest repositories first. The sort is stable, so equal sizes keep
/// fetch order.
pub fn rank_by_repository_size(mut projects: Vec<ProjectMetadata>, limit: usize) -> Vec<ProjectMetadata> {
    projects.sort_by(|a, b| b.repository_size.cmp(&a.repository_size));
    projects.truncate(limit);
    projects
}
