use super::board::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::{Outcome, Player};

const RUN_LENGTH: isize = 4;

/// Scan order at each cell
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DescendingDiagonal,
    Direction::AscendingDiagonal,
];

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub enum Direction {
    /// -
    Horizontal,
    /// |
    Vertical,
    /// \
    DescendingDiagonal,
    /// /
    AscendingDiagonal,
}

impl Direction {
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DescendingDiagonal => (1, 1),
            Direction::AscendingDiagonal => (-1, 1),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
pub struct WinningLine {
    pub player: Player,
    /// (row, column) of the first cell of the run
    pub start: (usize, usize),
    pub direction: Direction,
}

impl WinningLine {
    pub fn cells(&self) -> [(usize, usize); 4] {
        let (d_row, d_column) = self.direction.delta();
        let mut cells = [self.start; 4];
        for (step, cell) in cells.iter_mut().enumerate() {
            cell.0 = (self.start.0 as isize + d_row * step as isize) as usize;
            cell.1 = (self.start.1 as isize + d_column * step as isize) as usize;
        }
        cells
    }
}

fn run_from(board: &Board, row: usize, column: usize, direction: Direction) -> Option<Player> {
    let player = board.cell_at(row, column)?.owner()?;
    let (d_row, d_column) = direction.delta();
    for step in 1..RUN_LENGTH {
        let r = row as isize + d_row * step;
        let c = column as isize + d_column * step;
        if r < 0 || c < 0 {
            return None;
        }
        if board.cell_at(r as usize, c as usize) != Some(Cell::from(player)) {
            return None;
        }
    }
    Some(player)
}

///
/// First run of four in row-major cell order, trying the directions in
/// `DIRECTIONS` order at each cell.
///
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for row in 0..BOARD_HEIGHT {
        for column in 0..BOARD_WIDTH {
            for direction in DIRECTIONS {
                if let Some(player) = run_from(board, row, column, direction) {
                    return Some(WinningLine {
                        player,
                        start: (row, column),
                        direction,
                    });
                }
            }
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    match winning_line(board) {
        Some(line) => Outcome::win_for(line.player),
        None if board.is_full() => Outcome::Tie,
        None => Outcome::InProgress,
    }
}
