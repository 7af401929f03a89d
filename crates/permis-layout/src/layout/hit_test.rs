//! Point-to-cell hit testing over derived table geometry.

use crate::geometry::Point;
use crate::layout::table::TableLayout;

/// Result of a successful cell hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct CellHit {
    pub row_index: usize,
    pub column_key: String,
    /// The cell rectangle exactly as derived, for highlight rendering.
    pub rect: crate::geometry::Rect,
}

impl TableLayout {
    /// Find the data cell containing `point`.
    ///
    /// Header bands, column-header rows and rule lines never hit; cell
    /// rectangles are half-open so a point on a shared edge resolves to the
    /// cell on its lower-right side.
    pub fn cell_at(&self, point: Point) -> Option<CellHit> {
        // Narrow to the containing block first; blocks never overlap.
        let block = self.blocks.iter().find(|b| b.rect.contains(point))?;
        let cell = block.cells.iter().find(|c| c.rect.contains(point))?;
        Some(CellHit {
            row_index: cell.row_index,
            column_key: cell.column_key.clone(),
            rect: cell.rect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Column, Direction, TableElement, TableHeader, TableRow};
    use crate::layout::table::derive_table_layout;

    fn sample_layout() -> TableLayout {
        let rows: Vec<TableRow> = (0..25)
            .map(|i| {
                [("x", format!("{i}")), ("y", format!("{i}"))]
                    .into_iter()
                    .collect()
            })
            .collect();
        let table = TableElement::new(
            360.0,
            vec![
                Column::new("point", "N", 40.0),
                Column::new("x", "X", 40.0),
                Column::new("y", "Y", 40.0),
            ],
            10,
        )
        .with_rows(rows)
        .with_row_height(20.0)
        .with_direction(Direction::Rtl)
        .with_header(TableHeader::new("heading", 30.0));
        derive_table_layout(&table).unwrap()
    }

    #[test]
    fn test_hit_in_each_block() {
        let layout = sample_layout();
        // Data rows start below band (30) + column headers (20).
        // Rightmost block holds rows 0..10.
        let hit = layout.cell_at(Point::new(245.0, 55.0)).unwrap();
        assert_eq!(hit.row_index, 0);
        assert_eq!(hit.column_key, "point");
        // Leftmost block holds rows 20..25.
        let hit = layout.cell_at(Point::new(45.0, 75.0)).unwrap();
        assert_eq!(hit.row_index, 21);
        assert_eq!(hit.column_key, "x");
    }

    #[test]
    fn test_header_regions_miss() {
        let layout = sample_layout();
        // Inside the header band.
        assert_eq!(layout.cell_at(Point::new(100.0, 15.0)), None);
        // Inside the column-header row.
        assert_eq!(layout.cell_at(Point::new(245.0, 35.0)), None);
    }

    #[test]
    fn test_outside_table_misses() {
        let layout = sample_layout();
        assert_eq!(layout.cell_at(Point::new(-1.0, 60.0)), None);
        assert_eq!(layout.cell_at(Point::new(100.0, 1000.0)), None);
        // Below the short last block but within the first block's rows.
        assert_eq!(layout.cell_at(Point::new(45.0, 200.0)), None);
    }

    #[test]
    fn test_shared_edge_resolves_to_next_cell() {
        let layout = sample_layout();
        // y = 70 is the boundary between rows 0 and 1 of the right block
        // (data starts at 50, rows are 20 tall). Half-open rects put the
        // point in row 1.
        let hit = layout.cell_at(Point::new(245.0, 70.0)).unwrap();
        assert_eq!(hit.row_index, 1);
    }

    #[test]
    fn test_hit_rect_matches_cell_geometry() {
        let layout = sample_layout();
        let hit = layout.cell_at(Point::new(245.0, 55.0)).unwrap();
        let cell = layout.blocks[0]
            .cells
            .iter()
            .find(|c| c.row_index == 0 && c.column_key == "point")
            .unwrap();
        assert_eq!(hit.rect, cell.rect);
    }
}
