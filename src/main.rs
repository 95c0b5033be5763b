//! Plays a game at the terminal, or from a scripted list of moves
use clap::Parser;
use drop4_rs::config::SessionSettings;
use drop4_rs::error::SessionError;
use drop4_rs::games::{self, Games};
use drop4_rs::session::{LineMoveSource, ScriptedMoveSource};
use env_logger::fmt::Formatter;
use log::Record;
use std::io::{self, Write};
use std::thread;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(default_value = "c4")]
    game: Games,

    /// Columns to play in order instead of reading them from stdin
    #[arg(short, long, value_delimiter = ',')]
    moves: Vec<usize>,

    /// JSON settings file; replaces the other options when given
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long)]
    no_instructions: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    fn settings(&self) -> SessionSettings {
        SessionSettings {
            game: self.game,
            moves: if self.moves.is_empty() {
                None
            } else {
                Some(self.moves.clone())
            },
            show_instructions: !self.no_instructions,
        }
    }
}

fn run(settings: SessionSettings) -> Result<(), SessionError> {
    let mut out = io::stdout().lock();
    let outcome = match settings.moves {
        Some(moves) => games::play(
            settings.game,
            &mut ScriptedMoveSource::new(moves),
            &mut out,
            settings.show_instructions,
        )?,
        None => games::play(
            settings.game,
            &mut LineMoveSource::stdin(),
            &mut out,
            settings.show_instructions,
        )?,
    };
    log::info!("Session finished: {:?}", outcome);
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match &args.config {
        Some(path) => match SessionSettings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(2);
            }
        },
        None => args.settings(),
    };
    if let Err(err) = settings.validate() {
        eprintln!("Error: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run(settings) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
