use std::fmt;

use serde::{Deserialize, Serialize};

/// What a front end is allowed to see of one cell.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "state")]
pub enum Cell {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "flagged")]
    Flagged,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "number")]
    Number { adjacent: u8 },
    /// Only produced when the whole board is uncovered at the end of a game.
    #[serde(rename = "mine")]
    Mine,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Square grid edge length and number of mines to scatter over it.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameParams {
    pub size: usize,
    pub mines: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self { size: 8, mines: 10 }
    }
}

impl GameParams {
    pub fn cells(&self) -> usize {
        self.size * self.size
    }
}
