//! Tabular element description.

use serde::{Deserialize, Serialize};

use crate::element::{Direction, TextAlign};

/// Column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Key used to look values up in each row.
    pub key: String,
    /// Header title rendered in the per-block column header row.
    pub title: String,
    /// Column width in pixels; a missing width renders a zero-width cell
    /// rather than failing.
    pub width: f32,
    /// Cell text alignment for this column.
    pub align: TextAlign,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            key: String::new(),
            title: String::new(),
            width: 0.0,
            align: TextAlign::Center,
        }
    }
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>, width: f32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width,
            align: TextAlign::Center,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// One data row: an ordered key→value mapping matched against column keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    values: Vec<(String, String)>,
}

impl TableRow {
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    /// Value for the given column key, if present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TableRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Full-width header band drawn above the table blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableHeader {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub height: f32,
    pub fill: String,
    pub text_align: TextAlign,
}

impl Default for TableHeader {
    fn default() -> Self {
        Self {
            show: false,
            text: None,
            height: 0.0,
            fill: "#eeeeee".to_string(),
            text_align: TextAlign::Center,
        }
    }
}

impl TableHeader {
    pub fn new(text: impl Into<String>, height: f32) -> Self {
        Self {
            show: true,
            text: Some(text.into()),
            height,
            ..Default::default()
        }
    }
}

/// A tabular block to be laid out.
///
/// Data rows are paginated horizontally into fixed-capacity blocks; block
/// ordering follows the element direction (block 0 is rightmost for RTL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableElement {
    /// Total width available for block placement.
    pub width: f32,
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
    pub header: TableHeader,
    /// Uniform row height across the table.
    pub row_height: f32,
    /// Fixed number of data rows per block. Must be at least 1; zero is
    /// rejected when the layout is derived.
    pub rows_per_block: usize,
    pub direction: Direction,
    /// Fill for banded (zebra) rows.
    pub alt_row_fill: String,
    /// Fill for the remaining rows.
    pub row_fill: String,
    /// Fill for per-block column header rows.
    pub column_header_fill: String,
    pub font_size: f32,
    pub font_family: String,
}

impl Default for TableElement {
    fn default() -> Self {
        Self {
            width: 0.0,
            columns: Vec::new(),
            rows: Vec::new(),
            header: TableHeader::default(),
            row_height: 24.0,
            rows_per_block: 10,
            direction: Direction::Rtl,
            alt_row_fill: "#f5f5f5".to_string(),
            row_fill: "#ffffff".to_string(),
            column_header_fill: "#eeeeee".to_string(),
            font_size: 12.0,
            font_family: "Arial".to_string(),
        }
    }
}

impl TableElement {
    pub fn new(width: f32, columns: Vec<Column>, rows_per_block: usize) -> Self {
        Self {
            width,
            columns,
            rows_per_block,
            ..Default::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_header(mut self, header: TableHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sum of all column widths: the width of one block.
    pub fn block_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lookup() {
        let row: TableRow = [("x", "12.5"), ("y", ""), ("zone", "31")].into_iter().collect();
        assert_eq!(row.get("x"), Some("12.5"));
        assert_eq!(row.get("zone"), Some("31"));
        // Empty values read as missing so defaulting kicks in downstream.
        assert_eq!(row.get("y"), None);
        assert_eq!(row.get("absent"), None);
    }

    #[test]
    fn test_block_width_sums_columns() {
        let table = TableElement::new(
            360.0,
            vec![
                Column::new("x", "X", 40.0),
                Column::new("y", "Y", 40.0),
                Column::new("point", "N", 40.0),
            ],
            10,
        );
        assert_eq!(table.block_width(), 120.0);
    }
}
