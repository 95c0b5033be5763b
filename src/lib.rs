//! Rules engine for a two-player gravity-drop "four in a row" game, plus the
//! small framework a console driver plugs it into.
pub mod c4;
pub mod config;
pub mod error;
pub mod game;
pub mod games;
pub mod session;
