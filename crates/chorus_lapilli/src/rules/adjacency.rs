//! One-step adjacency over the 3x3 grid.

use crate::cell::Cell;

/// Cells reachable from the given cell in one move.
///
/// Edge-and-diagonal adjacency: the center touches all eight cells,
/// corners touch three, edge midpoints touch five. The relation is
/// symmetric and irreflexive, and is shared by destination validation
/// and the center-escape search.
pub fn neighbors(cell: Cell) -> &'static [Cell] {
    use Cell::*;
    match cell {
        TopLeft => &[TopCenter, MiddleLeft, Center],
        TopCenter => &[TopLeft, TopRight, MiddleLeft, Center, MiddleRight],
        TopRight => &[TopCenter, Center, MiddleRight],
        MiddleLeft => &[TopLeft, TopCenter, Center, BottomLeft, BottomCenter],
        Center => &[
            TopLeft,
            TopCenter,
            TopRight,
            MiddleLeft,
            MiddleRight,
            BottomLeft,
            BottomCenter,
            BottomRight,
        ],
        MiddleRight => &[TopCenter, TopRight, Center, BottomCenter, BottomRight],
        BottomLeft => &[MiddleLeft, Center, BottomCenter],
        BottomCenter => &[MiddleLeft, Center, MiddleRight, BottomLeft, BottomRight],
        BottomRight => &[Center, MiddleRight, BottomCenter],
    }
}

/// Whether `to` is reachable from `from` in one move.
pub fn is_adjacent(from: Cell, to: Cell) -> bool {
    neighbors(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn adjacency_is_symmetric() {
        for a in Cell::iter() {
            for b in Cell::iter() {
                assert_eq!(
                    is_adjacent(a, b),
                    is_adjacent(b, a),
                    "asymmetry between {a} and {b}"
                );
            }
        }
    }

    #[test]
    fn no_cell_is_adjacent_to_itself() {
        for cell in Cell::iter() {
            assert!(!is_adjacent(cell, cell), "{cell} adjacent to itself");
        }
    }

    #[test]
    fn degrees_match_grid_shape() {
        assert_eq!(neighbors(Cell::Center).len(), 8);
        for corner in [
            Cell::TopLeft,
            Cell::TopRight,
            Cell::BottomLeft,
            Cell::BottomRight,
        ] {
            assert_eq!(neighbors(corner).len(), 3, "{corner}");
        }
        for edge in [
            Cell::TopCenter,
            Cell::MiddleLeft,
            Cell::MiddleRight,
            Cell::BottomCenter,
        ] {
            assert_eq!(neighbors(edge).len(), 5, "{edge}");
        }
    }

    #[test]
    fn opposite_corners_are_not_adjacent() {
        assert!(!is_adjacent(Cell::TopLeft, Cell::BottomRight));
        assert!(!is_adjacent(Cell::TopRight, Cell::BottomLeft));
        assert!(!is_adjacent(Cell::TopLeft, Cell::TopRight));
    }
}
