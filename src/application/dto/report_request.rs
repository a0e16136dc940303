/// Request for the pipeline overview of a repository's board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRequest {
    pub repo_id: u64,
}

impl BoardRequest {
    pub fn new(repo_id: u64) -> Self {
        Self { repo_id }
    }
}

/// Request for the detail of a single epic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpicRequest {
    pub repo_id: u64,
    /// Issue number of the epic
    pub epic_id: u64,
}

impl EpicRequest {
    pub fn new(repo_id: u64, epic_id: u64) -> Self {
        Self { repo_id, epic_id }
    }
}

/// Request for the list of epics of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpicListRequest {
    pub repo_id: u64,
}

impl EpicListRequest {
    pub fn new(repo_id: u64) -> Self {
        Self { repo_id }
    }
}

/// Request for the ids of the user's repositories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryListRequest {
    /// Keep only repositories whose owner login equals this value
    pub match_owner: Option<String>,
    /// Keep only repositories whose name contains this value (any case)
    pub filter_name: Option<String>,
}

impl RepositoryListRequest {
    pub fn new(match_owner: Option<String>, filter_name: Option<String>) -> Self {
        Self {
            match_owner,
            filter_name,
        }
    }
}
