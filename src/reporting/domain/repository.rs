/// A source repository as known to the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub owner_login: String,
}

impl Repository {
    pub fn new(id: u64, name: impl Into<String>, owner_login: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            owner_login: owner_login.into(),
        }
    }
}

/// An issue in a repository. Boards reference issues only by number, so the
/// title always comes from the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
}

impl Issue {
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }

    /// Title cut to at most `max_chars` characters (not bytes).
    pub fn short_title(&self, max_chars: usize) -> String {
        self.title.chars().take(max_chars).collect()
    }
}
