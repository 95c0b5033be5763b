use super::board::{Board, Cell, BOARD_WIDTH};
use super::win::{self, WinningLine};
use crate::error::MoveError;
use crate::game::{Outcome, Player, State};

#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
pub struct PlayedMove {
    pub player: Player,
    /// 1-based, as requested
    pub column: usize,
    pub row: usize,
}

///
/// One game from first drop to result.
///
/// Owns the board, whose turn it is and the outcome; `apply_move` is the only
/// way any of them change. A refused move leaves all three untouched.
///
#[derive(Clone, Debug)]
pub struct C4State {
    board: Board,
    next_player: Player,
    outcome: Outcome,
    winning_line: Option<WinningLine>,
    history: Vec<PlayedMove>,
}

impl C4State {
    pub fn new() -> C4State {
        C4State {
            board: Board::new(),
            next_player: Player::Player1,
            outcome: Outcome::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 0-based on both axes
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.cell_at(row, column)
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// 1-based columns that would accept a token right now
    pub fn permitted_columns(&self) -> Vec<usize> {
        if self.outcome.is_terminal() {
            return vec![];
        }
        (0..BOARD_WIDTH)
            .filter(|&column| self.board.column_has_space(column))
            .map(|column| column + 1)
            .collect()
    }

    fn drop_for_current_player(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let index = column
            .checked_sub(1)
            .filter(|&index| index < BOARD_WIDTH)
            .ok_or(MoveError::InvalidColumn)?;
        self.board.drop_token(index, self.next_player)
    }
}

impl Default for C4State {
    fn default() -> Self {
        Self::new()
    }
}

impl State for C4State {
    fn next_player(&self) -> Option<Player> {
        if self.outcome.is_terminal() {
            None
        } else {
            Some(self.next_player)
        }
    }

    /// Drops the current player's token into `column` (1-based) and returns
    /// the row it landed in.
    fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        let player = self.next_player;
        let row = match self.drop_for_current_player(column) {
            Ok(row) => row,
            Err(err) => {
                log::debug!("{} refused column {}: {}", player, column, err);
                return Err(err);
            }
        };
        log::debug!("{} plays column {} (row {})", player, column, row);
        self.history.push(PlayedMove {
            player,
            column,
            row,
        });
        log::trace!("Board: {}", self.board.loggable());

        self.outcome = win::evaluate(&self.board);
        if self.outcome.winner().is_some() {
            self.winning_line = win::winning_line(&self.board);
        }

        if self.outcome.is_terminal() {
            log::info!(
                "Game over after {} moves: {:?}",
                self.history.len(),
                self.outcome
            );
        } else {
            self.next_player = player.other();
        }
        Ok(row)
    }

    fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::BOARD_HEIGHT;
    use super::*;

    fn play(columns: &[usize]) -> C4State {
        let mut state = C4State::new();
        for &column in columns {
            state.apply_move(column).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = C4State::new();
        assert_eq!(state.next_player(), Some(Player::Player1));
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(!state.terminal());
        assert_eq!(state.permitted_columns(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_apply_move_lands_on_bottom() {
        let mut state = C4State::new();
        assert_eq!(state.apply_move(4), Ok(BOARD_HEIGHT - 1));
        assert_eq!(state.cell_at(BOARD_HEIGHT - 1, 3), Some(Cell::Player1));
        assert_eq!(state.next_player(), Some(Player::Player2));
    }

    #[test]
    fn test_invalid_column_changes_nothing() {
        let mut state = play(&[3]);
        for column in [0, 8, usize::MAX] {
            assert_eq!(state.apply_move(column), Err(MoveError::InvalidColumn));
        }
        assert_eq!(state.next_player(), Some(Player::Player2));
        assert_eq!(state.board().token_count(), 1);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_turns_alternate_across_failures() {
        let mut state = C4State::new();
        state.apply_move(1).unwrap();
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));
        state.apply_move(2).unwrap();
        assert_eq!(state.apply_move(0), Err(MoveError::InvalidColumn));
        state.apply_move(3).unwrap();

        let players: Vec<Player> = state.history().iter().map(|m| m.player).collect();
        assert_eq!(
            players,
            vec![Player::Player1, Player::Player2, Player::Player1]
        );
        assert_eq!(state.cell_at(5, 0), Some(Cell::Player1));
        assert_eq!(state.cell_at(5, 1), Some(Cell::Player2));
        assert_eq!(state.cell_at(5, 2), Some(Cell::Player1));
    }

    #[test]
    fn test_column_full_changes_nothing() {
        let mut state = play(&[1, 1, 1, 1, 1, 1]);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(!state.permitted_columns().contains(&1));

        let board = state.board().clone();
        assert_eq!(state.apply_move(1), Err(MoveError::ColumnFull));
        assert_eq!(state.board(), &board);
        assert_eq!(state.next_player(), Some(Player::Player1));
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_horizontal_win() {
        let state = play(&[1, 7, 2, 7, 3, 7, 4]);
        assert_eq!(state.outcome(), Outcome::Player1Wins);
        assert_eq!(state.next_player(), None);
        assert!(state.permitted_columns().is_empty());
        assert_eq!(
            state.winning_line().map(|line| line.cells()),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
    }

    #[test]
    fn test_vertical_win_for_player_two() {
        let state = play(&[1, 2, 1, 2, 1, 2, 3, 2]);
        assert_eq!(state.outcome(), Outcome::Player2Wins);
        assert_eq!(state.history().last().map(|m| m.player), Some(Player::Player2));
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut state = play(&[1, 7, 2, 7, 3, 7, 4]);
        let board = state.board().clone();
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        // Invalid and full columns report GameOver too once the game has ended
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
        assert_eq!(state.board(), &board);
        assert_eq!(state.outcome(), Outcome::Player1Wins);
        assert_eq!(state.history().len(), 7);
    }

    #[test]
    fn test_tie() {
        let state = play(&[
            6, 5, 6, 1, 7, 3, 5, 6, 6, 1, 5, 2, 2, 1, 5, 6, 7, 6, 4, 2, 2, 3, 3, 7, 3, 7, 7, 4, 7,
            3, 1, 4, 1, 4, 4, 5, 4, 2, 5, 3, 2, 1,
        ]);
        assert_eq!(state.outcome(), Outcome::Tie);
        assert!(state.board().is_full());
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.next_player(), None);
    }
}
