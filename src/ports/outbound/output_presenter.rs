use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where rendered reports and report-level failure
/// messages end up (stdout/stderr for the CLI, a buffer in tests).
pub trait OutputPresenter {
    /// Presents rendered report content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;

    /// Presents a message explaining why no report was produced
    fn present_error(&self, message: &str) -> Result<()>;
}
