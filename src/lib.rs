//! zenq - ZenHub board and epic reports for GitHub repositories
//!
//! This library joins ZenHub board data (pipelines, estimates, epics) with
//! GitHub issue data (titles, repository names) and renders the result as
//! terminal tables, following a hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`reporting`): board, epic and repository models plus
//!   pure aggregation and filtering services
//! - **Application Layer** (`application`): one use case per report, read
//!   models and the report writer
//! - **Ports** (`ports`): interfaces for remote APIs, rendering and output
//! - **Adapters** (`adapters`): GitHub/ZenHub HTTP clients and console output
//! - **Shared** (`shared`): error types and exit codes
//!
//! # Example
//!
//! ```no_run
//! use zenq::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let clients = ApiClients::new(
//!     GitHubClient::new("github-token")?,
//!     ZenHubClient::new("zenhub-token")?,
//! );
//! let progress_reporter = StderrProgressReporter::new(false);
//!
//! let outcome = GetBoardUseCase::new(&clients, &progress_reporter)
//!     .execute(BoardRequest::new(123456))?;
//!
//! let writer = ReportWriter::new(SingleTableRenderer::for_stdout(), TerminalPresenter::new());
//! writer.write(&outcome)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod reporting;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        SingleTableRenderer, StderrProgressReporter, TerminalPresenter,
    };
    pub use crate::adapters::outbound::network::{GitHubClient, ZenHubClient};
    pub use crate::application::dto::{
        BoardFailure, BoardRequest, EpicListRequest, EpicRequest, ReportOutcome,
        RepositoryListRequest, NO_MATCHING_REPOSITORIES,
    };
    pub use crate::application::read_models::{Cell, CellStyle, Report, ReportSection, Table};
    pub use crate::application::use_cases::{
        GetBoardUseCase, GetEpicUseCase, ListEpicsUseCase, ListRepoIdsUseCase,
        SUB_ISSUE_TITLE_WIDTH,
    };
    pub use crate::application::{ApiClients, ReportWriter};
    pub use crate::ports::outbound::{
        BoardRepository, BoardResponse, IssueTracker, OutputPresenter, ProgressReporter,
        RawFailure, TableRenderer,
    };
    pub use crate::reporting::domain::{
        Board, BoardIssue, EpicDetail, EpicSubIssue, EpicSummary, Estimate, Issue, Pipeline,
        Repository,
    };
    pub use crate::reporting::services::{BoardSummarizer, PipelineSummary, RepositoryFilter};
    pub use crate::shared::error::{ExitCode, ZenqError};
    pub use crate::shared::Result;
}
