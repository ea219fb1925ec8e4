use std::{env, str::FromStr};

/// How each turn is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format [{other}]")),
        }
    }
}

/// Settings for the terminal front end, read from `MINESWEEPER_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub min_size: usize,
    pub max_size: usize,
    pub min_mines: usize,
    pub max_mines: usize,
    /// Fixed RNG seed, for replaying the same board.
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_size: 8,
            max_size: 50,
            min_mines: 5,
            max_mines: 20,
            seed: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Unset or unparsable values keep their default.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).and_then(|value| value.trim().parse().ok());

        Self {
            min_size: read("MINESWEEPER_MIN_SIZE").unwrap_or(defaults.min_size),
            max_size: read("MINESWEEPER_MAX_SIZE").unwrap_or(defaults.max_size),
            min_mines: read("MINESWEEPER_MIN_MINES").unwrap_or(defaults.min_mines),
            max_mines: read("MINESWEEPER_MAX_MINES").unwrap_or(defaults.max_mines),
            seed: lookup("MINESWEEPER_SEED").and_then(|value| value.trim().parse().ok()),
            output: lookup("MINESWEEPER_OUTPUT")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.output),
        }
    }
}
