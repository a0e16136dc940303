use crate::application::dto::{BoardRequest, ReportOutcome};
use crate::application::read_models::{Cell, Report, Table};
use crate::application::ApiClients;
use crate::ports::outbound::{BoardRepository, BoardResponse, IssueTracker, ProgressReporter};
use crate::reporting::services::BoardSummarizer;
use crate::shared::Result;

/// GetBoardUseCase - Points and issue counts per pipeline of a board
///
/// Produces one row per pipeline: name, total points (estimated issues only)
/// and issue count (all issues), under a table titled with the repository
/// name.
pub struct GetBoardUseCase<'a, I, B, PR> {
    clients: &'a ApiClients<I, B>,
    progress_reporter: &'a PR,
}

impl<'a, I, B, PR> GetBoardUseCase<'a, I, B, PR>
where
    I: IssueTracker,
    B: BoardRepository,
    PR: ProgressReporter,
{
    pub fn new(clients: &'a ApiClients<I, B>, progress_reporter: &'a PR) -> Self {
        Self {
            clients,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: BoardRequest) -> Result<ReportOutcome> {
        self.progress_reporter
            .report(&format!("📡 Fetching repository {}", request.repo_id));
        let repository = self
            .clients
            .issue_tracker
            .get_repository(request.repo_id)?;

        self.progress_reporter
            .report(&format!("📡 Fetching board for {}", repository.name));
        let board = match self.clients.board.get_board(request.repo_id)? {
            BoardResponse::Success(board) => board,
            BoardResponse::Failure(failure) => {
                return Ok(ReportOutcome::board_failure("board", failure))
            }
        };

        let mut table = Table::new().with_title(repository.name.as_str());
        for summary in BoardSummarizer::summarize(&board) {
            table.push_row([
                Cell::plain(summary.name.as_str()),
                Cell::plain(summary.points_label()),
                Cell::plain(summary.issues_label()),
            ]);
        }

        let mut report = Report::new();
        report.push_table(table);
        Ok(ReportOutcome::Rendered(report))
    }
}
