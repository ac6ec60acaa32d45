use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub path_with_namespace: String,
    pub http_url_to_repo: String,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub last_activity_at: String,
    /// Only present when the listing was requested with `statistics=true`
    /// and the token may read them.
    #[serde(default)]
    pub statistics: Option<ProjectStatistics>,
    /// Present on forks only.
    #[serde(default)]
    pub forked_from_project: Option<serde_json::Value>,
}

impl Project {
    pub fn is_fork(&self) -> bool {
        self.forked_from_project.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStatistics {
    #[serde(default)]
    pub commit_count: u64,
    #[serde(default)]
    pub repository_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub commits: u64,
}
