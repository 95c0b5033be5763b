use crate::c4::C4;
use crate::error::SessionError;
use crate::game::Outcome;
use crate::session::{run_session, MoveSource};
use clap::ValueEnum;
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum Games {
    C4,
}

/// Runs one session of `game` to its result.
pub fn play<M: MoveSource, W: Write>(
    game: Games,
    source: &mut M,
    out: &mut W,
    show_instructions: bool,
) -> Result<Outcome, SessionError> {
    match game {
        Games::C4 => run_session(&C4, source, out, show_instructions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ScriptedMoveSource;

    #[test]
    fn test_play_dispatches_c4() {
        let mut source = ScriptedMoveSource::new(vec![1, 7, 2, 7, 3, 7, 4]);
        let mut out = Vec::new();
        let outcome = play(Games::C4, &mut source, &mut out, false).unwrap();
        assert_eq!(outcome, Outcome::Player1Wins);
    }
}
