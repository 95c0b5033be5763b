use crate::c4::BOARD_WIDTH;
use crate::error::ConfigError;
use crate::games::Games;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_show_instructions() -> bool {
    true
}

///
/// Settings for one play session, usually read from a JSON file such as
///
/// ```json
/// { "game": "C4", "moves": [1, 7, 2, 7, 3, 7, 4] }
/// ```
///
/// Without `moves` the session reads columns from stdin.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionSettings {
    pub game: Games,
    #[serde(default)]
    pub moves: Option<Vec<usize>>,
    #[serde(default = "default_show_instructions")]
    pub show_instructions: bool,
}

impl SessionSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<SessionSettings, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = SessionSettings::parse(&contents)?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn parse(contents: &str) -> Result<SessionSettings, ConfigError> {
        let settings: SessionSettings = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(moves) = &self.moves {
            if let Some(bad) = moves.iter().find(|&&c| c == 0 || c > BOARD_WIDTH) {
                return Err(ConfigError::Validation(format!(
                    "scripted column {} is outside 1..={}",
                    bad, BOARD_WIDTH
                )));
            }
        }
        Ok(())
    }
}
