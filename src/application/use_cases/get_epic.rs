use super::fetch_issues;
use crate::application::dto::{EpicRequest, ReportOutcome};
use crate::application::read_models::{Cell, Report, Table};
use crate::application::ApiClients;
use crate::ports::outbound::{BoardRepository, BoardResponse, IssueTracker, ProgressReporter};
use crate::reporting::domain::{EpicDetail, Estimate, Issue};
use crate::shared::Result;

/// Widest sub-issue title shown in the "Issues" table
pub const SUB_ISSUE_TITLE_WIDTH: usize = 25;

/// GetEpicUseCase - Summary and sub-issues of one epic
///
/// Output, in order:
/// 1. the epic's own issue number and title
/// 2. a "Summary" table (total points, estimated points, current pipeline)
/// 3. an "Issues" table with one row per sub-issue, in board order
///
/// Every sub-issue title is fetched from the issue tracker separately.
pub struct GetEpicUseCase<'a, I, B, PR> {
    clients: &'a ApiClients<I, B>,
    progress_reporter: &'a PR,
}

impl<'a, I, B, PR> GetEpicUseCase<'a, I, B, PR>
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

    pub fn execute(&self, request: EpicRequest) -> Result<ReportOutcome> {
        self.progress_reporter
            .report(&format!("📡 Fetching repository {}", request.repo_id));
        let repository = self
            .clients
            .issue_tracker
            .get_repository(request.repo_id)?;

        self.progress_reporter
            .report(&format!("📡 Fetching epic #{}", request.epic_id));
        let epic = match self
            .clients
            .board
            .get_epic(request.repo_id, request.epic_id)?
        {
            BoardResponse::Success(epic) => epic,
            BoardResponse::Failure(failure) => {
                return Ok(ReportOutcome::board_failure("epic", failure))
            }
        };

        let epic_issue = self
            .clients
            .issue_tracker
            .get_issue(&repository, request.epic_id)?;

        let sub_issue_numbers: Vec<u64> = epic.issues.iter().map(|i| i.issue_number).collect();
        self.progress_reporter.report(&format!(
            "📡 Fetching {} sub-issue title(s)",
            sub_issue_numbers.len()
        ));
        let sub_issues = fetch_issues(
            &self.clients.issue_tracker,
            self.progress_reporter,
            &repository,
            &sub_issue_numbers,
        )?;

        let mut report = Report::new();
        report.push_line(vec![Cell::plain("Issue:")]);
        report.push_line(vec![
            Cell::plain("\t#"),
            Cell::highlighted(epic_issue.number.to_string()),
            Cell::plain(format!(" {}", epic_issue.title)),
        ]);
        report.push_line(vec![]);
        report.push_table(Self::summary_table(&epic));
        report.push_table(Self::issues_table(&epic, &sub_issues));

        Ok(ReportOutcome::Rendered(report))
    }

    fn summary_table(epic: &EpicDetail) -> Table {
        let mut table = Table::new().with_title("Summary").with_heading([
            "Total Points",
            "Estimated Points",
            "Current Pipeline",
        ]);
        table.push_row([
            Estimate::label(epic.total_epic_estimate),
            Estimate::label(epic.estimate),
            epic.pipeline_name.clone(),
        ]);
        table
    }

    fn issues_table(epic: &EpicDetail, sub_issues: &[Issue]) -> Table {
        let mut table = Table::new().with_title("Issues").with_heading([
            "Issue Number",
            "Title",
            "Estimate",
            "Current Pipeline",
        ]);
        for (sub_issue, issue) in epic.issues.iter().zip(sub_issues) {
            table.push_row([
                issue.number.to_string(),
                issue.short_title(SUB_ISSUE_TITLE_WIDTH),
                Estimate::label(sub_issue.estimate),
                sub_issue.pipeline_name.clone(),
            ]);
        }
        table
    }
}
