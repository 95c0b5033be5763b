use crate::error::MoveError;
use crate::game::Player;

pub const BOARD_WIDTH: usize = 7;
pub const BOARD_HEIGHT: usize = 6;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

///
/// The 6x7 grid. Row 0 is the top, columns are 0-based here.
///
/// Each column's tokens always sit in a contiguous block from the bottom
/// row up, and a placed token is never removed.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Cell; BOARD_HEIGHT * BOARD_WIDTH],
    // Tokens per column; the next free row is BOARD_HEIGHT - 1 - height
    heights: [usize; BOARD_WIDTH],
}

impl Board {
    pub fn new() -> Board {
        Board {
            cells: [Cell::Empty; BOARD_HEIGHT * BOARD_WIDTH],
            heights: [0; BOARD_WIDTH],
        }
    }

    pub fn column_has_space(&self, column: usize) -> bool {
        column < BOARD_WIDTH && self.heights[column] < BOARD_HEIGHT
    }

    /// Drops a token into `column`, returning the row it landed in.
    pub fn drop_token(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= BOARD_WIDTH {
            return Err(MoveError::InvalidColumn);
        }
        if !self.column_has_space(column) {
            return Err(MoveError::ColumnFull);
        }
        let row = BOARD_HEIGHT - 1 - self.heights[column];
        self.cells[row * BOARD_WIDTH + column] = player.into();
        self.heights[column] += 1;
        Ok(row)
    }

    /// `None` off the board
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        if row < BOARD_HEIGHT && column < BOARD_WIDTH {
            Some(self.cells[row * BOARD_WIDTH + column])
        } else {
            None
        }
    }

    pub fn column_height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == BOARD_HEIGHT)
    }

    pub fn loggable(&self) -> serde_json::Value {
        let rows: Vec<&[Cell]> = self.cells.chunks(BOARD_WIDTH).collect();
        serde_json::json!({ "board": rows })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
