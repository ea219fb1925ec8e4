use minesweeper_common::{models::Pos, protocol::CellUpdate};

use crate::data::{DisplayState, Grid};

impl Grid {
    /// Opens the zero-count region around `start` along with the numbered
    /// cells bordering it.
    ///
    /// `start` must be a safe cell with no mined neighbours. Numbered cells
    /// are revealed but never expanded, flagged ones included. A flagged
    /// zero cell keeps its flag and is not expanded. Every cell that changes
    /// is pushed to `updates` exactly once.
    pub fn reveal_cascade(&mut self, start: Pos, updates: &mut Vec<CellUpdate>) {
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            let Some(cell) = self.get_mut(pos) else {
                continue;
            };
            // queued from two sides before either copy got here
            if cell.display == DisplayState::RevealedEmpty {
                continue;
            }

            cell.display = DisplayState::RevealedEmpty;
            updates.push(CellUpdate {
                pos,
                value: (&*cell).into(),
            });

            for neighbor in self.neighbors(pos) {
                let Some(cell) = self.get_mut(neighbor) else {
                    continue;
                };

                let open = matches!(
                    cell.display,
                    DisplayState::RevealedEmpty | DisplayState::RevealedNumber(_)
                );
                if open {
                    continue;
                }

                if cell.adjacent == 0 {
                    if cell.display == DisplayState::Hidden {
                        stack.push(neighbor);
                    }
                } else {
                    cell.display = DisplayState::RevealedNumber(cell.adjacent);
                    updates.push(CellUpdate {
                        pos: neighbor,
                        value: (&*cell).into(),
                    });
                }
            }
        }
    }
}
