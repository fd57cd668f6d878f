//! Flat tabular view of a report, shared by every export format.

use crate::pipeline::normalize::format_followers;
use crate::types::ReportTable;

/// Column headers, in export order.
pub const EXPORT_HEADERS: [&str; 9] = [
    "Title",
    "Display Name",
    "Username",
    "Views",
    "Likes",
    "Shares",
    "Followers",
    "Link",
    "Followers (Formatted)",
];

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Int(u64),
    Empty,
}

impl Cell {
    /// Render the cell as text (empty cells become "").
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Header row plus data rows, built from a private copy of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Build a sheet from `table`, adding the display-only formatted followers column.
    pub fn from_table(table: &ReportTable, name: impl Into<String>) -> Self {
        let rows = table
            .iter()
            .map(|r| {
                vec![
                    Cell::Text(r.title.clone()),
                    Cell::Text(r.display_name.clone()),
                    Cell::Text(r.username.clone()),
                    Cell::Int(r.views),
                    Cell::Int(r.likes),
                    Cell::Int(r.shares),
                    r.followers.map_or(Cell::Empty, Cell::Int),
                    Cell::Text(r.source_url.clone()),
                    Cell::Text(format_followers(r.followers)),
                ]
            })
            .collect();

        Self {
            name: name.into(),
            headers: EXPORT_HEADERS.to_vec(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
