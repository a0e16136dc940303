use super::fetch_issues;
use crate::application::dto::{EpicListRequest, ReportOutcome};
use crate::application::read_models::{Cell, Report, Table};
use crate::application::ApiClients;
use crate::ports::outbound::{BoardRepository, BoardResponse, IssueTracker, ProgressReporter};
use crate::shared::Result;

/// ListEpicsUseCase - Issue number and title of every epic of a repository
pub struct ListEpicsUseCase<'a, I, B, PR> {
    clients: &'a ApiClients<I, B>,
    progress_reporter: &'a PR,
}

impl<'a, I, B, PR> ListEpicsUseCase<'a, I, B, PR>
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

    pub fn execute(&self, request: EpicListRequest) -> Result<ReportOutcome> {
        self.progress_reporter
            .report(&format!("📡 Fetching repository {}", request.repo_id));
        let repository = self
            .clients
            .issue_tracker
            .get_repository(request.repo_id)?;

        self.progress_reporter
            .report(&format!("📡 Fetching epics of {}", repository.name));
        let epics = match self.clients.board.list_epics(request.repo_id)? {
            BoardResponse::Success(epics) => epics,
            BoardResponse::Failure(failure) => {
                return Ok(ReportOutcome::board_failure("epics", failure))
            }
        };

        let numbers: Vec<u64> = epics.iter().map(|epic| epic.issue_number).collect();
        let issues = fetch_issues(
            &self.clients.issue_tracker,
            self.progress_reporter,
            &repository,
            &numbers,
        )?;

        let mut table = Table::new()
            .with_title("Epics")
            .with_heading(["Issue Number", "Description"])
            .with_inner_row_border();
        for issue in issues {
            table.push_row([
                Cell::plain(issue.number.to_string()),
                Cell::highlighted(issue.title),
            ]);
        }

        let mut report = Report::new();
        report.push_table(table);
        Ok(ReportOutcome::Rendered(report))
    }
}
