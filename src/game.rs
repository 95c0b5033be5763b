use crate::error::MoveError;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// 1 or 2, as shown to people
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

///
/// Where a game stands. Anything other than `InProgress` is terminal and
/// never changes again.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub enum Outcome {
    InProgress,
    Player1Wins,
    Player2Wins,
    Tie,
}

impl Outcome {
    pub fn win_for(player: Player) -> Outcome {
        match player {
            Player::Player1 => Outcome::Player1Wins,
            Player::Player2 => Outcome::Player2Wins,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Player1Wins => Some(Player::Player1),
            Outcome::Player2Wins => Some(Player::Player2),
            _ => None,
        }
    }
}

///
/// The rules side of a single play session.
///
/// Moves are column selections as the player sees them; the state validates
/// them and is the only thing that mutates turn and outcome.
pub trait State {
    fn next_player(&self) -> Option<Player>;
    fn apply_move(&mut self, column: usize) -> Result<usize, MoveError>;
    fn outcome(&self) -> Outcome;
    fn terminal(&self) -> bool {
        self.outcome().is_terminal()
    }
}

///
/// A game variant: creates sessions and knows how to present them.
///
pub trait Game {
    type StateType: State;
    fn instructions(&self) -> String;
    fn init_game(&self) -> Self::StateType;
    fn visualise_state(&self, state: &Self::StateType) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Player1.other(), Player::Player2);
        assert_eq!(Player::Player2.other(), Player::Player1);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::Player1.to_string(), "Player 1");
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Player1Wins.is_terminal());
        assert!(Outcome::Player2Wins.is_terminal());
        assert!(Outcome::Tie.is_terminal());
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::win_for(Player::Player2), Outcome::Player2Wins);
        assert_eq!(Outcome::Player1Wins.winner(), Some(Player::Player1));
        assert_eq!(Outcome::Tie.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }
}
