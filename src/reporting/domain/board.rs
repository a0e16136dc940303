use super::Estimate;

/// The ordered set of pipelines of a repository's board, in service order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub pipelines: Vec<Pipeline>,
}

/// A workflow column on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub name: String,
    pub issues: Vec<BoardIssue>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, issues: Vec<BoardIssue>) -> Self {
        Self {
            name: name.into(),
            issues,
        }
    }

    /// Sum of the estimates of the issues that carry one.
    pub fn total_estimate(&self) -> Estimate {
        Estimate::total(self.issues.iter().map(|issue| issue.estimate))
    }

    /// Number of issues in the pipeline, estimated or not.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardIssue {
    pub issue_number: Option<u64>,
    pub estimate: Option<Estimate>,
}

impl BoardIssue {
    pub fn new(issue_number: Option<u64>, estimate: Option<Estimate>) -> Self {
        Self {
            issue_number,
            estimate,
        }
    }
}
