use serde::{Deserialize, Serialize};

use crate::models::{Cell, Pos};

/// A single player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action")]
pub enum Command {
    #[serde(rename = "reveal")]
    Reveal { pos: Pos },
    #[serde(rename = "flag")]
    Flag { pos: Pos },
    #[serde(rename = "quit")]
    Quit,
}

/// How the engine classified one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The command was rejected and nothing changed.
    Error,
    Quit,
    Continue,
    /// A mine was revealed.
    Loser,
    /// Every cell is uncovered or correctly flagged.
    Done,
}

impl Outcome {
    /// No command is accepted after a terminal outcome.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Quit | Self::Loser | Self::Done)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub pos: Pos,
    pub value: Cell,
}

/// Full board snapshot, laid out as `field[y][x]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub size: usize,
    pub mines: usize,
    pub field: Vec<Vec<Cell>>,
}

impl GridView {
    pub fn get_cell(&self, pos: Pos) -> Option<&Cell> {
        self.field.get(pos.y)?.get(pos.x)
    }

    pub fn count(&self, wanted: impl Fn(&Cell) -> bool) -> usize {
        self.field.iter().flatten().filter(|&cell| wanted(cell)).count()
    }
}

/// Result of handling one command: its outcome and every cell whose
/// display changed because of it, each listed once.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: Outcome,
    pub updates: Vec<CellUpdate>,
}

impl TurnReport {
    pub fn rejected() -> Self {
        Self {
            outcome: Outcome::Error,
            updates: Vec::new(),
        }
    }
}
