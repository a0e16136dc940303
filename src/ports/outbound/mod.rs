/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the report use cases use
/// to interact with external systems (remote APIs, console, etc.).
pub mod board_repository;
pub mod issue_tracker;
pub mod output_presenter;
pub mod progress_reporter;
pub mod table_renderer;

pub use board_repository::{BoardRepository, BoardResponse, RawFailure};
pub use issue_tracker::IssueTracker;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use table_renderer::TableRenderer;
