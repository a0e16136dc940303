use crate::application::dto::{ReportOutcome, NO_MATCHING_REPOSITORIES};
use crate::application::read_models::{Cell, Report, ReportSection};
use crate::ports::outbound::{OutputPresenter, TableRenderer};
use crate::shared::error::ExitCode;
use crate::shared::Result;

/// ReportWriter - Turns a report outcome into output and an exit code
///
/// Only `ReportOutcome::Rendered` reaches the table renderer. Board failures
/// are passed to the presenter as plain messages.
pub struct ReportWriter<R, O> {
    renderer: R,
    output: O,
}

impl<R, O> ReportWriter<R, O>
where
    R: TableRenderer,
    O: OutputPresenter,
{
    pub fn new(renderer: R, output: O) -> Self {
        Self { renderer, output }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Writes the outcome and returns the exit code the process should end with
    pub fn write(&self, outcome: &ReportOutcome) -> Result<ExitCode> {
        match outcome {
            ReportOutcome::Rendered(report) => {
                self.output.present(&self.render(report))?;
            }
            ReportOutcome::BoardFailure(failure) => {
                self.output.present_error(&failure.message())?;
            }
            ReportOutcome::NoMatches => {
                let line = self
                    .renderer
                    .render_line(&[Cell::alert(NO_MATCHING_REPOSITORIES)]);
                self.output.present(&format!("{}\n", line))?;
            }
        }
        Ok(outcome.exit_code())
    }

    /// Renders every section of a report, each followed by a newline
    pub fn render(&self, report: &Report) -> String {
        let mut output = String::new();
        for section in &report.sections {
            match section {
                ReportSection::Line(cells) => output.push_str(&self.renderer.render_line(cells)),
                ReportSection::Table(table) => output.push_str(&self.renderer.render_table(table)),
            }
            output.push('\n');
        }
        output
    }
}
