/// Mock implementations for testing
mod mock_board_repository;
mod mock_issue_tracker;
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_table_renderer;

pub use mock_board_repository::MockBoardRepository;
pub use mock_issue_tracker::MockIssueTracker;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_table_renderer::MockTableRenderer;
