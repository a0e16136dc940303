pub mod board;
pub mod epic;
pub mod estimate;
pub mod repository;

pub use board::{Board, BoardIssue, Pipeline};
pub use epic::{EpicDetail, EpicSubIssue, EpicSummary};
pub use estimate::Estimate;
pub use repository::{Issue, Repository};
