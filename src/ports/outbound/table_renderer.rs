use crate::application::read_models::{Cell, Table};

/// TableRenderer port for turning report tables into terminal text
///
/// The renderer is the only component that knows about borders and colors;
/// use cases produce plain `Table` models.
pub trait TableRenderer {
    /// Renders a table into a multi-line string (no trailing newline)
    fn render_table(&self, table: &Table) -> String;

    /// Renders a single line of styled cells, concatenated without separators
    fn render_line(&self, cells: &[Cell]) -> String;
}
