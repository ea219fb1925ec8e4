use minesweeper_common::models::{self, Pos};

/// What the player currently sees of a cell. Also marks a cell as visited
/// for the cascade: anything but `Hidden` has already been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Hidden,
    Flagged,
    RevealedEmpty,
    RevealedNumber(u8),
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub mined: bool,
    pub flagged: bool,
    /// Mined neighbours, 0 to 8. Fixed once the grid is built.
    pub adjacent: u8,
    pub display: DisplayState,
}

impl Cell {
    pub(crate) fn new(mined: bool) -> Self {
        Self {
            mined,
            flagged: false,
            adjacent: 0,
            display: DisplayState::Hidden,
        }
    }

    /// Projection handed to front ends. With `reveal_all` every mine shows
    /// through whatever is drawn on top of it.
    pub fn view(&self, reveal_all: bool) -> models::Cell {
        if reveal_all && self.mined {
            return models::Cell::Mine;
        }
        match self.display {
            DisplayState::Hidden => models::Cell::Hidden,
            DisplayState::Flagged => models::Cell::Flagged,
            DisplayState::RevealedEmpty => models::Cell::Empty,
            DisplayState::RevealedNumber(adjacent) => models::Cell::Number { adjacent },
        }
    }
}

impl From<&Cell> for models::Cell {
    fn from(value: &Cell) -> Self {
        value.view(false)
    }
}

/// Square board of `size * size` cells.
///
/// Cells are stored at linear index `x * size + y`, the same numbering mine
/// placement draws from, so index `i` is the cell at `(i / size, i % size)`.
#[derive(Debug)]
pub struct Grid {
    pub size: usize,
    pub mines: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.validate_pos(&pos).then(|| pos.x * self.size + pos.y)
    }

    pub fn pos_of(&self, index: usize) -> Pos {
        Pos {
            x: index / self.size,
            y: index % self.size,
        }
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(self.index(pos)?)
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        let index = self.index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn validate_pos(&self, pos: &Pos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// The up-to-8 in-bounds cells around `pos`.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut neighbors = Vec::with_capacity(8);

        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let x = pos.x as i64 + dx;
                let y = pos.y as i64 + dy;

                if x >= 0 && y >= 0 && x < self.size as i64 && y < self.size as i64 {
                    neighbors.push(Pos {
                        x: x as usize,
                        y: y as usize,
                    });
                }
            }
        }

        neighbors
    }

    pub fn cells_in(&self, display: DisplayState) -> usize {
        self.cells.iter().filter(|cell| cell.display == display).count()
    }
}
