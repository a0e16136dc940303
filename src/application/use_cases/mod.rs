/// Use cases module - one report per CLI command
mod get_board;
mod get_epic;
mod list_epics;
mod list_repo_ids;

pub use get_board::GetBoardUseCase;
pub use get_epic::{GetEpicUseCase, SUB_ISSUE_TITLE_WIDTH};
pub use list_epics::ListEpicsUseCase;
pub use list_repo_ids::ListRepoIdsUseCase;

use crate::ports::outbound::{IssueTracker, ProgressReporter};
use crate::reporting::domain::{Issue, Repository};
use crate::shared::Result;

/// Resolves issue numbers to issues one request at a time, keeping the
/// order of `numbers`. The progress display is cleared even on failure.
fn fetch_issues<I, PR>(
    issue_tracker: &I,
    progress_reporter: &PR,
    repository: &Repository,
    numbers: &[u64],
) -> Result<Vec<Issue>>
where
    I: IssueTracker,
    PR: ProgressReporter,
{
    let total = numbers.len();
    let result = numbers
        .iter()
        .enumerate()
        .map(|(index, &number)| {
            let label = format!("#{}", number);
            progress_reporter.report_progress(index + 1, total, Some(label.as_str()));
            issue_tracker.get_issue(repository, number)
        })
        .collect::<Result<Vec<_>>>();

    progress_reporter.finish();
    result
}
