use super::{Cell, Table};

/// One block of report output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSection {
    /// A line of text; an empty line when there are no cells
    Line(Vec<Cell>),
    Table(Table),
}

/// Everything a successful command prints, in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, cells: Vec<Cell>) {
        self.sections.push(ReportSection::Line(cells));
    }

    pub fn push_table(&mut self, table: Table) {
        self.sections.push(ReportSection::Table(table));
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.sections.iter().filter_map(|section| match section {
            ReportSection::Table(table) => Some(table),
            ReportSection::Line(_) => None,
        })
    }

    /// Finds a table by its title
    pub fn table(&self, title: &str) -> Option<&Table> {
        self.tables()
            .find(|table| table.title.as_deref() == Some(title))
    }
}
