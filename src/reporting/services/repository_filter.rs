use crate::reporting::domain::Repository;

/// RepositoryFilter - Narrows a repository listing by owner and/or name
///
/// Both criteria are optional and compose: a repository is kept only when it
/// passes every criterion that was given.
/// - `match_owner` requires exact equality with the owner login
/// - `filter_name` requires a case-insensitive substring of the repository name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFilter {
    match_owner: Option<String>,
    filter_name: Option<String>,
}

impl RepositoryFilter {
    /// Creates a new filter. Empty strings are treated as "no criterion".
    pub fn new(match_owner: Option<String>, filter_name: Option<String>) -> Self {
        Self {
            match_owner: match_owner.filter(|owner| !owner.is_empty()),
            filter_name: filter_name
                .filter(|name| !name.is_empty())
                .map(|name| name.to_lowercase()),
        }
    }

    /// Returns true when the filter has no criteria at all
    pub fn is_empty(&self) -> bool {
        self.match_owner.is_none() && self.filter_name.is_none()
    }

    /// Checks whether a single repository passes every criterion
    pub fn matches(&self, repository: &Repository) -> bool {
        let owner_matches = self
            .match_owner
            .as_deref()
            .map_or(true, |owner| owner == repository.owner_login);

        let name_matches = self
            .filter_name
            .as_deref()
            .map_or(true, |needle| repository.name.to_lowercase().contains(needle));

        owner_matches && name_matches
    }

    /// Filters repositories, keeping their input order
    pub fn apply(&self, repositories: Vec<Repository>) -> Vec<Repository> {
        repositories
            .into_iter()
            .filter(|repo| self.matches(repo))
            .collect()
    }
}
