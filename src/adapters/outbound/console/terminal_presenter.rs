use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use std::io::{self, Write};

/// TerminalPresenter adapter: reports to stdout, failure messages to stderr
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for TerminalPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }

    fn present_error(&self, message: &str) -> Result<()> {
        writeln!(io::stderr(), "{}", message)
            .map_err(|e| anyhow::anyhow!("Failed to write to stderr: {}", e))?;
        Ok(())
    }
}
