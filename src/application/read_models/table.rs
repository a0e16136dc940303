//! Table view used by every report

/// How a cell should stand out when colors are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    /// Titles, names and issue numbers worth spotting at a glance
    Highlight,
    /// Messages that explain why there is nothing to show
    Alert,
}

/// A single piece of text with an optional style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CellStyle::Plain,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CellStyle::Highlight,
        }
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CellStyle::Alert,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::plain(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::plain(text)
    }
}

/// A titled grid of cells with an optional heading row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub title: Option<String>,
    pub heading: Option<Vec<Cell>>,
    pub rows: Vec<Vec<Cell>>,
    /// Draw a separator between body rows, not just below the heading
    pub inner_row_border: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_heading<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.heading = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_inner_row_border(mut self) -> Self {
        self.inner_row_border = true;
        self
    }

    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Widest row (heading included) decides the number of columns
    pub fn column_count(&self) -> usize {
        self.heading
            .iter()
            .chain(self.rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// Plain text of every body cell in one column, top to bottom
    pub fn column_text(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map_or("", |cell| cell.text.as_str()))
            .collect()
    }
}
