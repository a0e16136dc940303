/// The two remote clients a report needs, built once per invocation and
/// passed by reference into the use case that runs.
///
/// # Type Parameters
/// * `I` - IssueTracker implementation
/// * `B` - BoardRepository implementation
pub struct ApiClients<I, B> {
    pub issue_tracker: I,
    pub board: B,
}

impl<I, B> ApiClients<I, B> {
    pub fn new(issue_tracker: I, board: B) -> Self {
        Self {
            issue_tracker,
            board,
        }
    }
}
