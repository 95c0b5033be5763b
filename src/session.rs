use crate::error::SessionError;
use crate::game::{Game, Outcome, Player, State};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

///
/// Somewhere column choices come from: a person at a terminal, a script,
/// anything that can produce a number.
///
pub trait MoveSource {
    fn next_column(&mut self, player: Player) -> Result<usize, SessionError>;
}

/// Reads one column number per line.
pub struct LineMoveSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineMoveSource<R> {
    pub fn new(reader: R) -> LineMoveSource<R> {
        LineMoveSource { reader }
    }
}

impl LineMoveSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        LineMoveSource::new(io::stdin().lock())
    }
}

impl<R: BufRead> MoveSource for LineMoveSource<R> {
    fn next_column(&mut self, player: Player) -> Result<usize, SessionError> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let input = input.trim();
        log::trace!("{} typed {:?}", player, input);
        input
            .parse()
            .map_err(|_| SessionError::InvalidInput(input.to_string()))
    }
}

pub struct ScriptedMoveSource {
    moves: VecDeque<usize>,
}

impl ScriptedMoveSource {
    pub fn new(moves: Vec<usize>) -> ScriptedMoveSource {
        ScriptedMoveSource {
            moves: moves.into(),
        }
    }
}

impl MoveSource for ScriptedMoveSource {
    fn next_column(&mut self, _player: Player) -> Result<usize, SessionError> {
        self.moves.pop_front().ok_or(SessionError::MovesExhausted)
    }
}

fn result_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player1Wins => "Player 1 wins!",
        Outcome::Player2Wins => "Player 2 wins!",
        Outcome::Tie => "It's a tie!",
        Outcome::InProgress => "The game is still in progress.",
    }
}

///
/// Plays a fresh game of `game` to the end, asking `source` for every move
/// and writing the board and messages to `out`.
///
/// Refused moves and unreadable input are reported and asked for again. The
/// session only fails if the source or `out` does.
///
pub fn run_session<G: Game, M: MoveSource, W: Write>(
    game: &G,
    source: &mut M,
    out: &mut W,
    show_instructions: bool,
) -> Result<Outcome, SessionError> {
    if show_instructions {
        writeln!(out, "{}\n", game.instructions())?;
    }

    let mut state = game.init_game();
    while let Some(player) = state.next_player() {
        write!(out, "{}", game.visualise_state(&state))?;
        write!(out, "{}, column? ", player)?;
        out.flush()?;

        let column = match source.next_column(player) {
            Ok(column) => column,
            Err(SessionError::InvalidInput(input)) => {
                writeln!(out, "{:?} is not a column number, try again.", input)?;
                continue;
            }
            Err(err) => return Err(err),
        };

        if let Err(err) = state.apply_move(column) {
            log::debug!("Asking {} again after {}", player, err);
            writeln!(out, "Can't play column {}: {}, try again.", column, err)?;
        }
    }

    let outcome = state.outcome();
    write!(out, "{}", game.visualise_state(&state))?;
    writeln!(out, "{}", result_line(outcome))?;
    Ok(outcome)
}
