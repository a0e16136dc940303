use crate::application::read_models::Report;
use crate::ports::outbound::RawFailure;
use crate::shared::error::ExitCode;

/// Shown instead of an empty repository table
pub const NO_MATCHING_REPOSITORIES: &str = "No matching repositories found!";

/// The board service declined a request; carries its raw answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFailure {
    /// What was being retrieved ("board", "epic", "epics")
    pub subject: &'static str,
    pub failure: RawFailure,
}

impl BoardFailure {
    pub fn new(subject: &'static str, failure: RawFailure) -> Self {
        Self { subject, failure }
    }

    pub fn message(&self) -> String {
        format!(
            "There was an error retrieving your {}:\n{}",
            self.subject, self.failure.body
        )
    }
}

/// Result of running one report command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Rendered(Report),
    BoardFailure(BoardFailure),
    /// The repository filters left nothing to list
    NoMatches,
}

impl ReportOutcome {
    pub fn board_failure(subject: &'static str, failure: RawFailure) -> Self {
        ReportOutcome::BoardFailure(BoardFailure::new(subject, failure))
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReportOutcome::Rendered(_) | ReportOutcome::NoMatches => ExitCode::Success,
            ReportOutcome::BoardFailure(_) => ExitCode::BoardServiceError,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            ReportOutcome::Rendered(report) => Some(report),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&BoardFailure> {
        match self {
            ReportOutcome::BoardFailure(failure) => Some(failure),
            _ => None,
        }
    }
}
