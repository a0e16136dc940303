use crate::application::read_models::{Cell, CellStyle, Table};
use crate::ports::outbound::TableRenderer;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

const HORIZONTAL: &str = "─";
const VERTICAL: char = '│';

/// Corner and junction characters of one horizontal border line
struct BorderChars {
    left: &'static str,
    junction: &'static str,
    right: &'static str,
}

const TOP: BorderChars = BorderChars {
    left: "┌",
    junction: "┬",
    right: "┐",
};
const MIDDLE: BorderChars = BorderChars {
    left: "├",
    junction: "┼",
    right: "┤",
};
const BOTTOM: BorderChars = BorderChars {
    left: "└",
    junction: "┴",
    right: "┘",
};

/// SingleTableRenderer adapter drawing single-line box tables
///
/// ```text
/// ┌Summary───────┬──────────────────┬──────────────────┐
/// │ Total Points │ Estimated Points │ Current Pipeline │
/// ├──────────────┼──────────────────┼──────────────────┤
/// │ 13           │ N/A              │ In Progress      │
/// └──────────────┴──────────────────┴──────────────────┘
/// ```
///
/// Column widths are measured on the unstyled text, so colors never shift
/// the borders. A title that is wider than the table is left out.
pub struct SingleTableRenderer {
    color: bool,
}

impl SingleTableRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors only when stdout is a terminal and `NO_COLOR` is unset
    pub fn for_stdout() -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::new(color)
    }

    fn paint(&self, cell: &Cell) -> String {
        if !self.color {
            return cell.text.clone();
        }
        match cell.style {
            CellStyle::Plain => cell.text.clone(),
            CellStyle::Highlight => cell.text.green().to_string(),
            CellStyle::Alert => cell.text.red().to_string(),
        }
    }

    fn column_widths(table: &Table) -> Vec<usize> {
        let mut widths = vec![0; table.column_count()];
        for row in table.heading.iter().chain(table.rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.width());
            }
        }
        widths
    }

    fn border(widths: &[usize], chars: &BorderChars) -> String {
        let segments: Vec<String> = widths.iter().map(|w| HORIZONTAL.repeat(w + 2)).collect();
        format!(
            "{}{}{}",
            chars.left,
            segments.join(chars.junction),
            chars.right
        )
    }

    fn top_border(widths: &[usize], title: Option<&str>) -> String {
        let border = Self::border(widths, &TOP);
        let Some(title) = title else {
            return border;
        };

        let title_width = title.width();
        let inner_width = border.chars().count() - 2;
        if title_width > inner_width {
            return border;
        }

        let mut line = String::new();
        line.push_str(TOP.left);
        line.push_str(title);
        line.extend(border.chars().skip(1 + title_width));
        line
    }

    fn row(&self, cells: &[Cell], widths: &[usize]) -> String {
        let mut line = String::new();
        line.push(VERTICAL);
        for (index, width) in widths.iter().enumerate() {
            let (text, used) = match cells.get(index) {
                Some(cell) => (self.paint(cell), cell.text.width()),
                None => (String::new(), 0),
            };
            line.push(' ');
            line.push_str(&text);
            line.push_str(&" ".repeat(width.saturating_sub(used)));
            line.push(' ');
            line.push(VERTICAL);
        }
        line
    }
}

impl TableRenderer for SingleTableRenderer {
    fn render_table(&self, table: &Table) -> String {
        let widths = Self::column_widths(table);
        let mut lines = vec![Self::top_border(&widths, table.title.as_deref())];

        if let Some(heading) = &table.heading {
            lines.push(self.row(heading, &widths));
            if !table.rows.is_empty() {
                lines.push(Self::border(&widths, &MIDDLE));
            }
        }

        for (index, row) in table.rows.iter().enumerate() {
            if index > 0 && table.inner_row_border {
                lines.push(Self::border(&widths, &MIDDLE));
            }
            lines.push(self.row(row, &widths));
        }

        lines.push(Self::border(&widths, &BOTTOM));
        lines.join("\n")
    }

    fn render_line(&self, cells: &[Cell]) -> String {
        cells.iter().map(|cell| self.paint(cell)).collect()
    }
}
