use crate::reporting::domain::{Issue, Repository};
use crate::shared::Result;

/// IssueTracker port for resolving repositories and issue titles
///
/// This port abstracts the source-hosting platform. Board records only carry
/// issue numbers; titles and repository names come from here.
///
/// # Errors
/// Every method fails with a `ZenqError::RemoteRejection` when the platform
/// rejects the id or the credentials, carrying the platform's own message.
pub trait IssueTracker {
    /// Fetches a repository by its numeric id
    fn get_repository(&self, repo_id: u64) -> Result<Repository>;

    /// Fetches one issue of a repository
    ///
    /// # Arguments
    /// * `repository` - Repository the issue belongs to
    /// * `number` - Issue number within the repository
    fn get_issue(&self, repository: &Repository, number: u64) -> Result<Issue>;

    /// Lists every repository visible to the authenticated user
    fn list_user_repositories(&self) -> Result<Vec<Repository>>;
}
