//! Immutable board snapshot

use super::{Cell, Pos};
use crate::error::BoardError;

/// One full-board snapshot. Moves never mutate a board in place;
/// `with_placement` returns the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, always `size * size` long
    cells: Vec<Cell>,
}

impl Board {
    /// All-empty `size`×`size` board
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if !Pos::is_valid(row, col, self.size) {
            return Err(BoardError::IndexError {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.cells[Pos::new(row, col).index(self.size)])
    }

    /// Get cell by row-major index, `None` when out of range
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// New snapshot with `index` set to `cell`.
    ///
    /// Fails with `InvalidMove` if the square is already taken.
    pub fn with_placement(&self, index: usize, cell: Cell) -> Result<Board, BoardError> {
        match self.cells.get(index) {
            None => {
                let pos = Pos::from_index(index, self.size.max(1));
                Err(BoardError::IndexError {
                    row: pos.row,
                    col: pos.col,
                    size: self.size,
                })
            }
            Some(existing) if !existing.is_empty() => Err(BoardError::InvalidMove { index }),
            Some(_) => {
                let mut next = self.clone();
                next.cells[index] = cell;
                Ok(next)
            }
        }
    }

    /// Lowest empty row in `col`, scanning from the bottom
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.size {
            return None;
        }
        (0..self.size)
            .rev()
            .find(|&row| self.cells[row * self.size + col].is_empty())
    }

    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Number of occupied squares
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_size_squared_cells() {
        for size in [1, 4, 5, 6, 8] {
            let board = Board::empty(size);
            assert_eq!(board.cells().len(), size * size);
            assert!(board.cells().iter().all(|c| *c == Cell::Empty));
            assert_eq!(board.stone_count(), 0);
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::empty(5);
        assert_eq!(board.get(4, 4), Ok(Cell::Empty));
        assert_eq!(
            board.get(5, 0),
            Err(BoardError::IndexError { row: 5, col: 0, size: 5 })
        );
        assert_eq!(
            board.get(0, 7),
            Err(BoardError::IndexError { row: 0, col: 7, size: 5 })
        );
    }

    #[test]
    fn test_with_placement_leaves_original_untouched() {
        let board = Board::empty(4);
        let next = board.with_placement(13, Cell::X).unwrap();
        assert_eq!(next.get(3, 1), Ok(Cell::X));
        assert_eq!(board.get(3, 1), Ok(Cell::Empty));
        assert_eq!(next.stone_count(), 1);
    }

    #[test]
    fn test_with_placement_occupied() {
        let board = Board::empty(4).with_placement(2, Cell::O).unwrap();
        assert_eq!(
            board.with_placement(2, Cell::X),
            Err(BoardError::InvalidMove { index: 2 })
        );
    }

    #[test]
    fn test_with_placement_out_of_range() {
        let board = Board::empty(3);
        assert!(matches!(
            board.with_placement(9, Cell::X),
            Err(BoardError::IndexError { .. })
        ));
    }

    #[test]
    fn test_lowest_empty_row() {
        let board = Board::empty(4);
        assert_eq!(board.lowest_empty_row(2), Some(3));

        let board = board.with_placement(14, Cell::X).unwrap();
        assert_eq!(board.lowest_empty_row(2), Some(2));
        assert_eq!(board.lowest_empty_row(4), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::empty(2);
        for i in 0..4 {
            assert!(!board.is_full());
            board = board.with_placement(i, Cell::O).unwrap();
        }
        assert!(board.is_full());
        assert!(board.is_column_full(0));
        assert!(board.is_column_full(1));
    }
}
