use crate::reporting::domain::{Board, EpicDetail, EpicSummary};
use crate::shared::Result;

/// Raw body and status of a board service response that was not a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFailure {
    pub status: u16,
    pub body: String,
}

/// Outcome of a board service call.
///
/// A non-success HTTP status is not an `Err`: callers get the raw body back
/// and decide how to report it. `Err` is reserved for transport failures and
/// undecodable payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardResponse<T> {
    Success(T),
    Failure(RawFailure),
}

impl<T> BoardResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, BoardResponse::Success(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> BoardResponse<U> {
        match self {
            BoardResponse::Success(value) => BoardResponse::Success(f(value)),
            BoardResponse::Failure(failure) => BoardResponse::Failure(failure),
        }
    }
}

/// BoardRepository port for reading a repository's board service data
///
/// This port abstracts the board-tracking service that layers estimates,
/// epics and pipelines on top of the issue tracker. All calls are read-only.
pub trait BoardRepository {
    /// Lists the epics tracked for a repository
    fn list_epics(&self, repo_id: u64) -> Result<BoardResponse<Vec<EpicSummary>>>;

    /// Fetches estimate, pipeline and sub-issues of one epic
    ///
    /// # Arguments
    /// * `repo_id` - Numeric repository id
    /// * `epic_id` - Issue number of the epic
    fn get_epic(&self, repo_id: u64, epic_id: u64) -> Result<BoardResponse<EpicDetail>>;

    /// Fetches all pipelines of the repository's board, in service order
    fn get_board(&self, repo_id: u64) -> Result<BoardResponse<Board>>;
}
