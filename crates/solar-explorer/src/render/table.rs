//! Table body construction

use std::fmt::Write;

use super::escape_html;
use crate::types::{CelestialBody, SortField};

/// Fixed column order shared by the header, the rows and the sort selector
pub const COLUMNS: [SortField; 6] = SortField::ALL;

/// One table row: a text cell per column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn from_record(body: &CelestialBody) -> Self {
        Self {
            cells: COLUMNS.iter().map(|field| cell_text(body, *field)).collect(),
        }
    }
}

/// Cell text for one attribute; absent values render empty
fn cell_text(body: &CelestialBody, field: SortField) -> String {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    match field {
        SortField::Name => body.name.clone(),
        SortField::Satellites => opt(body.satellites),
        SortField::RadiusKm => opt(body.radius_km),
        SortField::SemiMajorAxisAu => opt(body.semi_major_axis_au),
        SortField::Eccentricity => opt(body.eccentricity),
        SortField::DensityGCm3 => opt(body.density_g_cm3),
    }
}

/// Rebuilt from scratch on every change; never patched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    pub rows: Vec<TableRow>,
}

impl TableBody {
    pub fn from_records(records: &[CelestialBody]) -> Self {
        Self {
            rows: records.iter().map(TableRow::from_record).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `<tbody>` element with escaped cells
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in &row.cells {
                let _ = write!(html, "<td>{}</td>", escape_html(cell));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>");
        html
    }

    /// `<thead>` element with the column labels
    pub fn header_html() -> String {
        let mut html = String::from("<thead>\n<tr>");
        for field in COLUMNS {
            let _ = write!(html, "<th>{}</th>", escape_html(field.label()));
        }
        html.push_str("</tr>\n</thead>");
        html
    }

    /// Complete `<table>` element
    pub fn to_table_html(&self, id: &str) -> String {
        format!(
            "<table id=\"{}\">\n{}\n{}\n</table>",
            escape_html(id),
            Self::header_html(),
            self.to_html()
        )
    }

    /// Aligned plain-text table with a header line
    pub fn to_text(&self) -> String {
        let headers: Vec<&str> = COLUMNS.iter().map(|f| f.label()).collect();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_text_line(&mut out, headers.iter().copied(), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_text_line(&mut out, rule.iter().map(String::as_str), &widths);
        for row in &self.rows {
            push_text_line(&mut out, row.cells.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn push_text_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planets() -> Vec<CelestialBody> {
        vec![
            CelestialBody::new("Earth").with_attributes(1, 6371.0, 1.0, 0.0167, 5.51),
            CelestialBody::new("Mars").with_attributes(2, 3390.0, 1.524, 0.0934, 3.93),
        ]
    }

    #[test]
    fn test_one_row_per_record_in_column_order() {
        let body = TableBody::from_records(&planets());
        assert_eq!(body.len(), 2);
        assert!(body.rows.iter().all(|row| row.cells.len() == 6));
        assert_eq!(
            body.rows[0].cells,
            ["Earth", "1", "6371", "1", "0.0167", "5.51"]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = planets();
        let first = TableBody::from_records(&records);
        let second = TableBody::from_records(&records);
        assert_eq!(first, second);
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_empty_input_renders_no_rows() {
        let body = TableBody::from_records(&[]);
        assert!(body.is_empty());
        assert_eq!(body.to_html(), "<tbody>\n</tbody>");
    }

    #[test]
    fn test_cells_are_escaped() {
        let body = TableBody::from_records(&[CelestialBody::new("<script>alert(1)</script>")]);
        let html = body.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_missing_values_render_empty() {
        let body = TableBody::from_records(&[CelestialBody::new("Vulcan")]);
        assert_eq!(body.rows[0].cells, ["Vulcan", "", "", "", "", ""]);
    }

    #[test]
    fn test_header_labels() {
        let header = TableBody::header_html();
        assert!(header.contains("<th>Radius (km)</th>"));
        assert_eq!(header.matches("<th>").count(), 6);
    }

    #[test]
    fn test_text_table_alignment() {
        let text = TableBody::from_records(&planets()).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name   Satellites"));
        assert!(lines[1].starts_with("-----  ----------"));
        assert!(lines[3].starts_with("Mars   2"));
    }
}
