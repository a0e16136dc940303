use super::Estimate;

/// An entry of a repository's epic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpicSummary {
    pub issue_number: u64,
}

/// Board-side detail of a single epic.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicDetail {
    pub estimate: Option<Estimate>,
    pub total_epic_estimate: Option<Estimate>,
    pub pipeline_name: String,
    pub issues: Vec<EpicSubIssue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EpicSubIssue {
    pub issue_number: u64,
    pub estimate: Option<Estimate>,
    pub pipeline_name: String,
}
