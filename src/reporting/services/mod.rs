/// Domain services - pure aggregation and filtering over domain models
mod board_summarizer;
mod repository_filter;

pub use board_summarizer::{BoardSummarizer, PipelineSummary};
pub use repository_filter::RepositoryFilter;
