use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zenq::prelude::*;

/// Mock IssueTracker serving canned repositories and issues
#[derive(Default, Clone)]
pub struct MockIssueTracker {
    pub repositories: HashMap<u64, Repository>,
    pub issues: HashMap<u64, Issue>,
    pub user_repositories: Vec<Repository>,
    pub rejection: Option<(u16, String)>,
    pub issue_requests: Arc<Mutex<Vec<u64>>>,
}

impl MockIssueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, id: u64, name: &str, owner: &str) -> Self {
        self.repositories
            .insert(id, Repository::new(id, name, owner));
        self
    }

    pub fn with_issue(mut self, number: u64, title: &str) -> Self {
        self.issues.insert(number, Issue::new(number, title));
        self
    }

    pub fn with_user_repository(mut self, id: u64, name: &str, owner: &str) -> Self {
        self.user_repositories
            .push(Repository::new(id, name, owner));
        self
    }

    /// Every call fails the way GitHub rejects a bad token or id
    pub fn rejecting(status: u16, message: &str) -> Self {
        Self {
            rejection: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn requested_issues(&self) -> Vec<u64> {
        self.issue_requests.lock().unwrap().clone()
    }

    fn reject(&self) -> Result<()> {
        if let Some((status, message)) = &self.rejection {
            return Err(ZenqError::RemoteRejection {
                service: "GitHub",
                status: *status,
                message: message.clone(),
            }
            .into());
        }
        Ok(())
    }

    fn not_found() -> anyhow::Error {
        ZenqError::RemoteRejection {
            service: "GitHub",
            status: 404,
            message: "Not Found".to_string(),
        }
        .into()
    }
}

impl IssueTracker for MockIssueTracker {
    fn get_repository(&self, repo_id: u64) -> Result<Repository> {
        self.reject()?;
        self.repositories
            .get(&repo_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    fn get_issue(&self, _repository: &Repository, number: u64) -> Result<Issue> {
        self.reject()?;
        self.issue_requests.lock().unwrap().push(number);
        self.issues.get(&number).cloned().ok_or_else(Self::not_found)
    }

    fn list_user_repositories(&self) -> Result<Vec<Repository>> {
        self.reject()?;
        Ok(self.user_repositories.clone())
    }
}
