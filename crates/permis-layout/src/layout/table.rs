//! Table geometry derivation.
//!
//! Data rows are partitioned into fixed-capacity blocks placed side by side
//! across the table width; block ordering follows the element's writing
//! direction while columns inside a block always run left to right. Every
//! rectangle a renderer or hit-tester needs is produced here.

use crate::element::{Direction, TableElement, TextAlign};
use crate::geometry::Rect;
use crate::{LayoutError, Result};

/// Full-width band drawn above all blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBand {
    pub rect: Rect,
    pub text: String,
    pub fill: String,
    pub text_align: TextAlign,
}

/// One column-header cell inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub column_key: String,
    pub title: String,
    pub rect: Rect,
    pub align: TextAlign,
}

/// Background band of one rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGeom {
    /// Index into the element's data rows.
    pub row_index: usize,
    pub rect: Rect,
    /// Zebra striping flag: even in-block rows are banded.
    pub banded: bool,
}

/// One rendered cell rectangle with its resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeom {
    pub row_index: usize,
    pub column_key: String,
    pub value: String,
    pub rect: Rect,
    pub align: TextAlign,
}

/// A straight grid line (vertical column separator or horizontal row rule).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// One fixed-capacity block of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub index: usize,
    /// Outer border rectangle; for a partially filled last block it covers
    /// only the rows actually present.
    pub rect: Rect,
    pub header_cells: Vec<HeaderCell>,
    pub rows: Vec<RowGeom>,
    pub cells: Vec<CellGeom>,
    pub vertical_rules: Vec<RuleSegment>,
    pub horizontal_rules: Vec<RuleSegment>,
}

/// Complete positioned geometry for one table element.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub width: f32,
    pub height: f32,
    pub block_width: f32,
    pub block_count: usize,
    pub rows_per_block: usize,
    pub header_band: Option<HeaderBand>,
    pub blocks: Vec<TableBlock>,
}

impl TableLayout {
    /// Total number of rendered data rows across all blocks.
    pub fn rendered_rows(&self) -> usize {
        self.blocks.iter().map(|b| b.rows.len()).sum()
    }
}

/// Derive the complete geometry for a table element.
///
/// The only fatal input is `rows_per_block == 0`; everything else (missing
/// column widths, missing row values, zero rows) degrades to zero-sized or
/// empty geometry.
pub fn derive_table_layout(element: &TableElement) -> Result<TableLayout> {
    if element.rows_per_block == 0 {
        return Err(LayoutError::InvalidRowsPerBlock(element.rows_per_block));
    }

    let block_width = element.block_width();
    let row_count = element.rows.len();
    let rows_per_block = element.rows_per_block;
    let block_count = row_count.div_ceil(rows_per_block);

    let has_header = element.header.show && element.header.height > 0.0;
    let table_start_y = if has_header { element.header.height } else { 0.0 };

    let header_band = has_header.then(|| HeaderBand {
        rect: Rect::new(0.0, 0.0, element.width, element.header.height),
        text: element.header.text.clone().unwrap_or_default(),
        fill: element.header.fill.clone(),
        text_align: element.header.text_align,
    });

    log::debug!(
        "table layout: {} rows into {} block(s) of {} ({} wide, dir {})",
        row_count,
        block_count,
        rows_per_block,
        block_width,
        element.direction,
    );

    let header_rows = usize::from(has_header);
    let mut blocks = Vec::with_capacity(block_count);

    for b in 0..block_count {
        let bx = match element.direction {
            // Block 0 is rightmost in RTL reading order.
            Direction::Rtl => element.width - block_width * (b + 1) as f32,
            Direction::Ltr => block_width * b as f32,
        };

        let start_index = b * rows_per_block;
        let rows_in_block = rows_per_block.min(row_count - start_index);
        let block_height = element.row_height * (rows_in_block + header_rows) as f32;

        let mut header_cells = Vec::new();
        if has_header {
            let mut cx = bx;
            for column in &element.columns {
                header_cells.push(HeaderCell {
                    column_key: column.key.clone(),
                    title: column.title.clone(),
                    rect: Rect::new(cx, table_start_y, column.width, element.row_height),
                    align: column.align,
                });
                cx += column.width;
            }
        }

        // Vertical separators after every column, sized to this block's
        // actual row count.
        let mut vertical_rules = Vec::with_capacity(element.columns.len());
        let mut cx = bx;
        for column in &element.columns {
            cx += column.width;
            vertical_rules.push(RuleSegment {
                x1: cx,
                y1: table_start_y,
                x2: cx,
                y2: table_start_y + block_height,
            });
        }

        let mut rows = Vec::with_capacity(rows_in_block);
        let mut cells = Vec::new();
        let mut horizontal_rules = Vec::with_capacity(rows_in_block);

        for r in 0..rows_in_block {
            let row_index = start_index + r;
            let ry = table_start_y + element.row_height * (r + header_rows) as f32;

            rows.push(RowGeom {
                row_index,
                rect: Rect::new(bx, ry, block_width, element.row_height),
                banded: r % 2 == 0,
            });
            horizontal_rules.push(RuleSegment {
                x1: bx,
                y1: ry,
                x2: bx + block_width,
                y2: ry,
            });

            let row = &element.rows[row_index];
            let mut cx = bx;
            for column in &element.columns {
                let value = match row.get(&column.key) {
                    Some(v) => v.to_string(),
                    // Point-number columns auto-fill with the 1-based row
                    // number when the row carries no value.
                    None if column.key == "point" => (row_index + 1).to_string(),
                    None => String::new(),
                };
                cells.push(CellGeom {
                    row_index,
                    column_key: column.key.clone(),
                    value,
                    rect: Rect::new(cx, ry, column.width, element.row_height),
                    align: column.align,
                });
                cx += column.width;
            }
        }

        blocks.push(TableBlock {
            index: b,
            rect: Rect::new(bx, table_start_y, block_width, block_height),
            header_cells,
            rows,
            cells,
            vertical_rules,
            horizontal_rules,
        });
    }

    // The first block is always the fullest, so it fixes the table height.
    let tallest = rows_per_block.min(row_count);
    let height = table_start_y + element.row_height * (tallest + header_rows) as f32;

    Ok(TableLayout {
        width: element.width,
        height,
        block_width,
        block_count,
        rows_per_block,
        header_band,
        blocks,
    })
}
