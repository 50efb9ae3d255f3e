//! Fixed-column wrapping grid
//!
//! Items flow left-to-right, top-to-bottom. The last row is padded with
//! spacers so every row has the same number of equally weighted cells.

use std::num::NonZeroUsize;

/// A grid cell: either an item or an empty spacer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell<T> {
    Item(T),
    Spacer,
}

impl<T> GridCell<T> {
    pub fn item(&self) -> Option<&T> {
        match self {
            GridCell::Item(item) => Some(item),
            GridCell::Spacer => None,
        }
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self, GridCell::Spacer)
    }
}

/// Split `items` into rows of exactly `columns` cells.
///
/// Produces `ceil(len / columns)` rows; an empty slice yields no rows.
pub fn grid_rows<T>(items: &[T], columns: NonZeroUsize) -> Vec<Vec<GridCell<&T>>> {
    let columns = columns.get();
    items
        .chunks(columns)
        .map(|chunk| {
            let mut row: Vec<GridCell<&T>> = chunk.iter().map(GridCell::Item).collect();
            row.resize(columns, GridCell::Spacer);
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_seven_items_three_columns() {
        let items: Vec<u32> = (0..7).collect();
        let rows = grid_rows(&items, cols(3));

        assert_eq!(rows.len(), 3);
        let last = &rows[2];
        assert_eq!(last[0], GridCell::Item(&6));
        assert!(last[1].is_spacer());
        assert!(last[2].is_spacer());
    }

    #[test]
    fn test_empty_items_produce_no_rows() {
        let items: Vec<u32> = Vec::new();
        assert!(grid_rows(&items, cols(3)).is_empty());
    }

    #[test]
    fn test_exact_fit_has_no_spacers() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let rows = grid_rows(&items, cols(3));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().flatten().all(|cell| !cell.is_spacer()));
    }

    #[test]
    fn test_row_count_width_and_order() {
        for len in 0..20usize {
            for n in 1..6usize {
                let items: Vec<usize> = (0..len).collect();
                let rows = grid_rows(&items, cols(n));

                assert_eq!(rows.len(), len.div_ceil(n));
                assert!(rows.iter().all(|row| row.len() == n));

                let flattened: Vec<usize> = rows
                    .iter()
                    .flatten()
                    .filter_map(|cell| cell.item().map(|v| **v))
                    .collect();
                assert_eq!(flattened, items);
            }
        }
    }

    #[test]
    fn test_spacers_only_trail_the_last_row() {
        let items: Vec<u8> = (0..8).collect();
        let rows = grid_rows(&items, cols(3));
        for row in &rows[..rows.len() - 1] {
            assert!(row.iter().all(|cell| !cell.is_spacer()));
        }
    }

    #[test]
    fn test_single_column() {
        let items = ["x", "y"];
        let rows = grid_rows(&items, cols(1));
        assert_eq!(rows, vec![vec![GridCell::Item(&"x")], vec![GridCell::Item(&"y")]]);
    }
}
