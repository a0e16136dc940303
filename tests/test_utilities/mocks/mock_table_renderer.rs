use std::sync::{Arc, Mutex};
use zenq::prelude::*;

/// Mock TableRenderer that records which tables it was asked to draw
#[derive(Default, Clone)]
pub struct MockTableRenderer {
    pub rendered_titles: Arc<Mutex<Vec<String>>>,
}

impl MockTableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_count(&self) -> usize {
        self.rendered_titles.lock().unwrap().len()
    }
}

impl TableRenderer for MockTableRenderer {
    fn render_table(&self, table: &Table) -> String {
        let title = table.title.clone().unwrap_or_default();
        self.rendered_titles.lock().unwrap().push(title.clone());
        format!("[table {} with {} rows]", title, table.rows.len())
    }

    fn render_line(&self, cells: &[Cell]) -> String {
        cells.iter().map(|cell| cell.text.as_str()).collect()
    }
}
