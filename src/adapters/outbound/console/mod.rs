/// Console adapters - progress on stderr, reports on stdout
mod progress_reporter;
mod table_renderer;
mod terminal_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use table_renderer::SingleTableRenderer;
pub use terminal_presenter::TerminalPresenter;
