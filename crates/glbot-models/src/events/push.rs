use serde::{Deserialize, Serialize};

/// GitLab repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlRepository {
    /// Name.
    pub name: String,
}

/// GitLab commit author.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlCommitAuthor {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
}

/// GitLab commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlCommit {
    /// Commit id.
    pub id: String,
    /// Commit message.
    pub message: String,
    /// Author.
    pub author: GlCommitAuthor,
}

/// GitLab push event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlPushEvent {
    /// Pushed ref, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Repository.
    pub repository: GlRepository,
    /// Pushed commits, in push order.
    #[serde(default)]
    pub commits: Vec<GlCommit>,
}
