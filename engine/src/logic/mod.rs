//! Board construction, mine counting and the win check.

mod cascade;

use minesweeper_common::models::GameParams;
use rand::{Rng, seq::SliceRandom};
use tracing::debug;

use crate::{
    data::{Cell, DisplayState, Grid},
    error::SetupError,
};

fn validate_params(params: &GameParams) -> Result<(), SetupError> {
    if params.size == 0 {
        return Err(SetupError::EmptyGrid);
    }
    if params.mines > params.cells() {
        return Err(SetupError::TooManyMines {
            mines: params.mines,
            cells: params.cells(),
        });
    }
    Ok(())
}

/// Picks `params.mines` distinct linear indices out of `0..size * size`.
///
/// Partial Fisher-Yates: only the first `mines` slots get shuffled, so this
/// is linear in the cell count and can never draw the same index twice.
pub fn generate_mines<R: Rng + ?Sized>(params: &GameParams, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..params.cells()).collect();
    let (mines, _) = indices.partial_shuffle(rng, params.mines);
    mines.to_vec()
}

impl Grid {
    pub fn build<R: Rng + ?Sized>(params: GameParams, rng: &mut R) -> Result<Self, SetupError> {
        validate_params(&params)?;
        let mines = generate_mines(&params, rng);
        Self::with_mines(params.size, &mines)
    }

    /// Builds a grid with mines at exactly the given linear indices.
    pub fn with_mines(size: usize, mines: &[usize]) -> Result<Self, SetupError> {
        let params = GameParams {
            size,
            mines: mines.len(),
        };
        validate_params(&params)?;

        let mut mined = vec![false; params.cells()];
        for &index in mines {
            match mined.get_mut(index) {
                None => {
                    return Err(SetupError::MineOutOfRange {
                        index,
                        cells: params.cells(),
                    });
                }
                Some(true) => return Err(SetupError::DuplicateMine(index)),
                Some(slot) => *slot = true,
            }
        }

        let mut grid = Self {
            size,
            mines: mines.len(),
            cells: mined.into_iter().map(Cell::new).collect(),
        };
        grid.count_adjacent_mines();
        debug!("Built {}x{} grid with {} mines", size, size, grid.mines);

        Ok(grid)
    }

    /// Fills in every cell's neighbour mine count. Runs once, right after
    /// the mines are placed.
    fn count_adjacent_mines(&mut self) {
        let counts: Vec<u8> = (0..self.cells.len())
            .map(|index| {
                self.neighbors(self.pos_of(index))
                    .into_iter()
                    .filter(|&pos| self.get(pos).is_some_and(|cell| cell.mined))
                    .count() as u8
            })
            .collect();

        for (cell, count) in self.cells.iter_mut().zip(counts) {
            cell.adjacent = count;
        }
    }

    /// True once nothing is hidden and no safe cell carries a flag.
    ///
    /// Flags cannot be removed, so a flag on a safe cell keeps this false
    /// for the rest of the game.
    pub fn is_done(&self) -> bool {
        self.cells.iter().all(|cell| match cell.display {
            DisplayState::Hidden => false,
            DisplayState::Flagged => cell.mined,
            DisplayState::RevealedEmpty | DisplayState::RevealedNumber(_) => true,
        })
    }
}
