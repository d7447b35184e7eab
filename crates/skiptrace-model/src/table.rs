//! In-memory snapshot of an uploaded table.

/// Header row plus data rows, all cells as text.
///
/// Rows may be shorter than the header; missing cells read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Header names upper-cased, in column order.
    pub fn upper_headers(&self) -> Vec<String> {
        self.headers.iter().map(|h| h.to_uppercase()).collect()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
