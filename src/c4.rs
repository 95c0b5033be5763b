mod board;
mod controller;
mod win;

pub use board::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};
pub use controller::{C4State, PlayedMove};
pub use win::{evaluate, winning_line, Direction, WinningLine, DIRECTIONS};

use crate::game::Game;

const PLAYER_1_TOKEN: char = '#';
const PLAYER_2_TOKEN: char = '&';

pub struct C4;

impl Game for C4 {
    type StateType = C4State;

    fn instructions(&self) -> String {
        [
            "Welcome to Connect Four!",
            "",
            "Instructions:",
            "You and your partner will select who goes first.",
            "Use the column numbers to guide which column to drop your disc in,",
            "taking turns to use any open slot in the top of the grid.",
            "Whoever gets four discs in a row horizontally, vertically, or diagonally wins!",
            "The game will also end if the board is full and no discs can be placed,",
            "in which case the players tie.",
        ]
        .join("\n")
    }

    fn init_game(&self) -> Self::StateType {
        C4State::new()
    }

    fn visualise_state(&self, state: &Self::StateType) -> String {
        let separator = "-".repeat(BOARD_WIDTH * 3 + 1);
        let mut out = String::from("|");
        for column in 1..=BOARD_WIDTH {
            out.push_str(&format!("{:>2}|", column));
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
        for row in 0..BOARD_HEIGHT {
            out.push('|');
            for column in 0..BOARD_WIDTH {
                let token = match state.cell_at(row, column) {
                    Some(Cell::Player1) => PLAYER_1_TOKEN,
                    Some(Cell::Player2) => PLAYER_2_TOKEN,
                    _ => ' ',
                };
                out.push(' ');
                out.push(token);
                out.push('|');
            }
            out.push('\n');
            out.push_str(&separator);
            out.push('\n');
        }
        out
    }
}
