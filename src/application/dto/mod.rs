/// Data Transfer Objects for the application layer
mod report_outcome;
mod report_request;

pub use report_outcome::{BoardFailure, ReportOutcome, NO_MATCHING_REPOSITORIES};
pub use report_request::{BoardRequest, EpicListRequest, EpicRequest, RepositoryListRequest};
