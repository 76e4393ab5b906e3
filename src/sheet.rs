// src/sheet.rs
//! Record mapper: header row + data rows → the export document.
//!
//! Everything here is pure over the parsed grid. Row-level anomalies
//! (missing name, short row, absent optional column) resolve to defaults
//! or a skipped row and never fail the run; the only failure is a grid
//! too small to carry data at all.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One project row, shaped for the page. Field order is the output order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub repo_url: String,
    pub image_url: String,
    pub features: Vec<String>,
}

/// The persisted document. `resume_url` is sheet-global, not per-record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetExport {
    pub resume_url: String,
    pub projects: Vec<ProjectRecord>,
}

/// Lower-cased header name → zero-based column position.
pub struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    /// Lookup by canonical (lower-case) column name. Absent column is
    /// "not found", never an error.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }
}

/// Build the column index from the grid's first row.
/// Header cells are trimmed and lower-cased; on duplicate names the
/// first occurrence wins.
pub fn build_header_index(grid: &[Vec<String>]) -> HeaderIndex {
    let mut map = HashMap::new();
    if let Some(header) = grid.first() {
        for (i, cell) in header.iter().enumerate() {
            map.entry(cell.trim().to_lowercase()).or_insert(i);
        }
    }
    HeaderIndex(map)
}

/// First non-empty, trimmed `resumeurl` cell across the data rows, in row
/// order. Empty string when the column is missing or never populated.
pub fn find_first_resume_url(grid: &[Vec<String>], index: &HeaderIndex) -> String {
    let Some(col) = index.get("resumeurl") else {
        return s!();
    };
    grid.iter()
        .skip(1)
        .filter_map(|row| row.get(col))
        .map(|cell| cell.trim())
        .find(|cell| !cell.is_empty())
        .map(String::from)
        .unwrap_or_default()
}

/// Identifier-safe slug from a display name: lower-case, every run of
/// non-alphanumeric characters collapsed to one hyphen, no hyphen at
/// either end. Distinct names may collide; nothing deduplicates them.
pub fn slugify(name: &str) -> String {
    let mut slug = s!();
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Comma-separated cell → trimmed, non-empty pieces in order.
/// Duplicates are preserved.
fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Map a tokenized grid (header + data rows) to the export document.
///
/// `EmptySheet` when there is no data row; callers treat that as
/// "no update", not a hard failure. Rows with an empty name are skipped.
pub fn build_export(grid: &[Vec<String>]) -> Result<SheetExport, Error> {
    if grid.len() < 2 {
        return Err(Error::EmptySheet);
    }

    let index = build_header_index(grid);
    let resume_url = find_first_resume_url(grid, &index);

    let mut projects = Vec::new();
    for row in &grid[1..] {
        // Short rows read as empty for trailing columns.
        let get = |name: &str| -> String {
            index
                .get(name)
                .and_then(|col| row.get(col))
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default()
        };

        let name = get("name");
        if name.is_empty() {
            continue;
        }

        let category = match get("category") {
            c if c.is_empty() => s!("Other"),
            c => c,
        };

        projects.push(ProjectRecord {
            id: slugify(&name),
            name,
            category,
            description: get("description"),
            technologies: split_list(&get("technologies")),
            live_url: get("liveurl"),
            repo_url: get("repourl"),
            image_url: get("imageurl"),
            features: split_list(&get("features")),
        });
    }

    Ok(SheetExport { resume_url, projects })
}
