use minesweeper_common::{
    models::GameParams,
    protocol::{Command, GridView, Outcome, TurnReport},
};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::{
    command,
    data::Grid,
    error::{CommandError, SetupError},
};

/// One game: the grid plus whether it has ended.
#[derive(Debug)]
pub struct GameEngine {
    grid: Grid,
    finished: Option<Outcome>,
}

impl GameEngine {
    #[instrument(level = "trace", skip(rng))]
    pub fn setup<R: Rng + ?Sized>(params: GameParams, rng: &mut R) -> Result<Self, SetupError> {
        info!(
            "Creating new game: {}x{} with {} mines",
            params.size, params.size, params.mines
        );
        Ok(Self::from_grid(Grid::build(params, rng)?))
    }

    /// Game with mines at fixed linear indices instead of random ones.
    #[instrument(level = "trace", skip(mines))]
    pub fn with_mines(size: usize, mines: &[usize]) -> Result<Self, SetupError> {
        info!(
            "Creating fixed game: {}x{} with {} mines",
            size,
            size,
            mines.len()
        );
        Ok(Self::from_grid(Grid::with_mines(size, mines)?))
    }

    fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            finished: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> GameParams {
        GameParams {
            size: self.grid.size,
            mines: self.grid.mines,
        }
    }

    /// The terminal outcome, once there is one.
    pub fn finished(&self) -> Option<Outcome> {
        self.finished
    }

    /// Parses and plays one line of player input.
    #[instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, input: &str) -> TurnReport {
        match command::parse(input) {
            Ok(command) => self.play(command),
            Err(err) => {
                debug!("Rejected input [{}]: {}", input.trim(), err);
                TurnReport::rejected()
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn play(&mut self, command: Command) -> TurnReport {
        let mut updates = Vec::new();
        let result = match self.finished {
            Some(_) => Err(CommandError::GameOver),
            None => self.grid.apply(command, &mut updates),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("Rejected {:?}: {}", command, err);
                return TurnReport::rejected();
            }
        };

        match outcome {
            Outcome::Loser => warn!("Player hit a mine - game over!"),
            Outcome::Done => info!("Game won! Every cell cleared or flagged."),
            Outcome::Quit => info!("Player quit"),
            Outcome::Continue | Outcome::Error => {
                debug!("{:?} changed {} cells", command, updates.len())
            }
        }

        if outcome.is_terminal() {
            self.finished = Some(outcome);
        }

        TurnReport { outcome, updates }
    }

    /// Snapshot for drawing, as rows of `y`. `reveal_all` uncovers mines.
    pub fn view(&self, reveal_all: bool) -> GridView {
        let size = self.grid.size;
        let field = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| self.grid.cells[x * size + y].view(reveal_all))
                    .collect()
            })
            .collect();

        GridView {
            size,
            mines: self.grid.mines,
            field,
        }
    }
}
