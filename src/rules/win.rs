//! Win condition checking
//!
//! A player wins with K identical marks in a straight line: horizontal,
//! vertical, or either diagonal. Every in-bounds line of length K is
//! enumerated once per board size and tested against each snapshot.

use crate::board::{Board, Player, Pos};

/// Line directions in scan priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// →
    Horizontal,
    /// ↓
    Vertical,
    /// ↘
    DiagonalDown,
    /// ↙
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    /// Whether a line of `k` cells starting at (row, col) stays on the board
    fn fits(self, row: usize, col: usize, k: usize, size: usize) -> bool {
        let row_fits = row + k <= size;
        let col_fits = col + k <= size;
        match self {
            Direction::Horizontal => col_fits,
            Direction::Vertical => row_fits,
            Direction::DiagonalDown => row_fits && col_fits,
            Direction::DiagonalUp => row_fits && col + 1 >= k,
        }
    }
}

/// A run of K board indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub direction: Direction,
    /// Row-major indices, starting at `start`
    pub cells: Vec<usize>,
}

impl Line {
    fn new(start: Pos, direction: Direction, k: usize, size: usize) -> Self {
        let (dr, dc) = direction.delta();
        let cells = (0..k as isize)
            .map(|step| {
                let row = (start.row as isize + dr * step) as usize;
                let col = (start.col as isize + dc * step) as usize;
                Pos::new(row, col).index(size)
            })
            .collect();
        Self {
            start,
            direction,
            cells,
        }
    }

    /// Owner of the line if all cells hold the same non-empty mark
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let (&first, rest) = self.cells.split_first()?;
        let first = board.cell(first)?;
        let owner = first.player()?;
        rest.iter()
            .all(|&idx| board.cell(idx) == Some(first))
            .then_some(owner)
    }
}

/// Precomputed line table for one (board size, win length) pair
#[derive(Debug, Clone)]
pub struct WinDetector {
    size: usize,
    win_length: usize,
    lines: Vec<Line>,
}

impl WinDetector {
    pub fn new(size: usize, win_length: usize) -> Self {
        let mut lines = Vec::new();
        if win_length > 0 && win_length <= size {
            for row in 0..size {
                for col in 0..size {
                    for direction in Direction::ALL {
                        if direction.fits(row, col, win_length, size) {
                            lines.push(Line::new(Pos::new(row, col), direction, win_length, size));
                        }
                    }
                }
            }
        }
        Self {
            size,
            win_length,
            lines,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// All candidate lines in scan order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// First winning line in scan order
    pub fn winning_line(&self, board: &Board) -> Option<&Line> {
        debug_assert_eq!(board.size(), self.size);
        self.lines.iter().find(|line| line.owner(board).is_some())
    }

    /// Check for a winner
    ///
    /// Returns `Some(Player)` if any line is complete, `None` otherwise.
    pub fn winner(&self, board: &Board) -> Option<Player> {
        self.lines.iter().find_map(|line| line.owner(board))
    }
}
