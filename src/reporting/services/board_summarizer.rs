use crate::reporting::domain::{Board, Estimate};

/// Totals for one pipeline of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub name: String,
    pub total_estimate: Estimate,
    pub issue_count: usize,
}

impl PipelineSummary {
    pub fn points_label(&self) -> String {
        format!("{} points", self.total_estimate)
    }

    pub fn issues_label(&self) -> String {
        format!("{} issues", self.issue_count)
    }
}

/// BoardSummarizer - Rolls a board up into per-pipeline totals
pub struct BoardSummarizer;

impl BoardSummarizer {
    /// Summarizes every pipeline of the board.
    ///
    /// The result is in reverse service order: Backlog, In Progress, Done
    /// becomes Done, In Progress, Backlog.
    pub fn summarize(board: &Board) -> Vec<PipelineSummary> {
        board
            .pipelines
            .iter()
            .rev()
            .map(|pipeline| PipelineSummary {
                name: pipeline.name.clone(),
                total_estimate: pipeline.total_estimate(),
                issue_count: pipeline.issue_count(),
            })
            .collect()
    }
}
