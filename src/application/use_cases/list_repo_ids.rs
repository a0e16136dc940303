use crate::application::dto::{ReportOutcome, RepositoryListRequest};
use crate::application::read_models::{Cell, Report, Table};
use crate::application::ApiClients;
use crate::ports::outbound::{IssueTracker, ProgressReporter};
use crate::reporting::services::RepositoryFilter;
use crate::shared::Result;

/// ListRepoIdsUseCase - Ids of the repositories visible to the token owner
///
/// The ids are what `--repo-id` expects. Results can be narrowed by owner
/// and by name; an empty result is reported as `ReportOutcome::NoMatches`.
pub struct ListRepoIdsUseCase<'a, I, B, PR> {
    clients: &'a ApiClients<I, B>,
    progress_reporter: &'a PR,
}

impl<'a, I, B, PR> ListRepoIdsUseCase<'a, I, B, PR>
where
    I: IssueTracker,
    PR: ProgressReporter,
{
    pub fn new(clients: &'a ApiClients<I, B>, progress_reporter: &'a PR) -> Self {
        Self {
            clients,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: RepositoryListRequest) -> Result<ReportOutcome> {
        self.progress_reporter.report("📡 Fetching your repositories");
        let repositories = self.clients.issue_tracker.list_user_repositories()?;

        let filter = RepositoryFilter::new(request.match_owner, request.filter_name);
        let total = repositories.len();
        let matching = filter.apply(repositories);
        if !filter.is_empty() {
            self.progress_reporter.report(&format!(
                "🔎 {} of {} repositories match the filters",
                matching.len(),
                total
            ));
        }

        if matching.is_empty() {
            return Ok(ReportOutcome::NoMatches);
        }

        let mut table = Table::new()
            .with_title("Repositories")
            .with_inner_row_border();
        for repository in matching {
            table.push_row([
                Cell::plain(repository.id.to_string()),
                Cell::highlighted(repository.name),
            ]);
        }

        let mut report = Report::new();
        report.push_table(table);
        Ok(ReportOutcome::Rendered(report))
    }
}
