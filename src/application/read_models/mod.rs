//! Read models for report output
//!
//! Use cases build these view structs; the table renderer turns them into
//! terminal text.

pub mod report;
pub mod table;

pub use report::{Report, ReportSection};
pub use table::{Cell, CellStyle, Table};
