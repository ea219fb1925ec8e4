//! Turning a line of player input into a [`Command`] and applying it to a
//! [`Grid`].

use minesweeper_common::{
    models::Pos,
    protocol::{CellUpdate, Command, Outcome},
};
use tracing::{debug, warn};

use crate::{
    data::{DisplayState, Grid},
    error::CommandError,
};

/// Parses `<verb> <x>,<y>`.
///
/// `quit` needs no coordinates and ignores anything after it. Negative
/// coordinates are well formed but address no cell, so they come back as
/// [`CommandError::CellNotFound`].
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let mut tokens = input.split_whitespace();
    let verb = tokens.next().ok_or(CommandError::Empty)?;

    if verb == "quit" {
        return Ok(Command::Quit);
    }

    let coordinates = tokens.next().ok_or(CommandError::MissingCoordinates)?;
    if let Some(extra) = tokens.next() {
        return Err(CommandError::MalformedCoordinates(format!("{coordinates} {extra}")));
    }

    let pos = parse_pos(coordinates)?;
    match verb {
        "reveal" => Ok(Command::Reveal { pos }),
        "flag" => Ok(Command::Flag { pos }),
        other => Err(CommandError::UnknownVerb(other.to_string())),
    }
}

fn parse_pos(coordinates: &str) -> Result<Pos, CommandError> {
    let malformed = || CommandError::MalformedCoordinates(coordinates.to_string());

    let (x, y) = coordinates.split_once(',').ok_or_else(malformed)?;
    let x: i64 = x.parse().map_err(|_| malformed())?;
    let y: i64 = y.parse().map_err(|_| malformed())?;

    match (usize::try_from(x), usize::try_from(y)) {
        (Ok(x), Ok(y)) => Ok(Pos { x, y }),
        _ => Err(CommandError::CellNotFound { x, y }),
    }
}

impl Grid {
    /// Applies one command, pushing every cell it changes onto `updates`.
    ///
    /// Rejected commands leave the grid untouched. Revealing a mine returns
    /// [`Outcome::Loser`] without changing anything either, flag or not. A
    /// flag does not stop a reveal: the cell is uncovered underneath it.
    pub fn apply(
        &mut self,
        command: Command,
        updates: &mut Vec<CellUpdate>,
    ) -> Result<Outcome, CommandError> {
        let (pos, flag) = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Reveal { pos } => (pos, false),
            Command::Flag { pos } => (pos, true),
        };

        let Some(cell) = self.get_mut(pos) else {
            warn!("No cell at ({}, {})", pos.x, pos.y);
            return Err(CommandError::CellNotFound {
                x: pos.x as i64,
                y: pos.y as i64,
            });
        };

        if flag {
            if cell.display != DisplayState::Hidden {
                debug!("Flagging uncovered cell ({}, {})", pos.x, pos.y);
            }
            cell.flagged = true;
            cell.display = DisplayState::Flagged;
            updates.push(CellUpdate {
                pos,
                value: (&*cell).into(),
            });
        } else if cell.mined {
            return Ok(Outcome::Loser);
        } else if cell.adjacent > 0 {
            let display = DisplayState::RevealedNumber(cell.adjacent);
            if cell.display != display {
                cell.display = display;
                updates.push(CellUpdate {
                    pos,
                    value: (&*cell).into(),
                });
            }
        } else {
            debug!("Cascading from ({}, {})", pos.x, pos.y);
            self.reveal_cascade(pos, updates);
        }

        if self.is_done() {
            Ok(Outcome::Done)
        } else {
            Ok(Outcome::Continue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8x8 board with mines at linear indices 5, 9, 29, 42, 45, 50, 54.
    fn fixture() -> Grid {
        Grid::with_mines(8, &[5, 9, 29, 42, 45, 50, 54]).unwrap()
    }

    fn snapshot(grid: &Grid) -> Vec<DisplayState> {
        grid.cells.iter().map(|cell| cell.display).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("reveal 3,4"), Ok(Command::Reveal { pos: Pos::new(3, 4) }));
        assert_eq!(parse("  flag 0,7 \n"), Ok(Command::Flag { pos: Pos::new(0, 7) }));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("quit 0,0"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(parse(""), Err(CommandError::Empty));
        assert_eq!(parse("reveal"), Err(CommandError::MissingCoordinates));
        assert_eq!(
            parse("reveal 3"),
            Err(CommandError::MalformedCoordinates("3".to_string()))
        );
        assert_eq!(
            parse("reveal a,b"),
            Err(CommandError::MalformedCoordinates("a,b".to_string()))
        );
        assert_eq!(
            parse("reveal 1,2,3"),
            Err(CommandError::MalformedCoordinates("1,2,3".to_string()))
        );
        assert_eq!(
            parse("reveal 1, 2"),
            Err(CommandError::MalformedCoordinates("1, 2".to_string()))
        );
        assert_eq!(parse("dig 1,2"), Err(CommandError::UnknownVerb("dig".to_string())));
    }

    #[test]
    fn test_quit_must_be_the_verb() {
        assert_eq!(
            parse("quitter 1,1"),
            Err(CommandError::UnknownVerb("quitter".to_string()))
        );
        assert_eq!(
            parse("reveal quit"),
            Err(CommandError::MalformedCoordinates("quit".to_string()))
        );
    }

    #[test]
    fn test_negative_coordinates_are_not_found() {
        assert_eq!(parse("flag -1,2"), Err(CommandError::CellNotFound { x: -1, y: 2 }));
    }

    #[test]
    fn test_out_of_grid_leaves_grid_hidden() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        let command = parse("reveal 99,99").unwrap();
        assert_eq!(
            grid.apply(command, &mut updates),
            Err(CommandError::CellNotFound { x: 99, y: 99 })
        );
        assert!(updates.is_empty());
        assert!(grid.cells.iter().all(|cell| cell.display == DisplayState::Hidden));
    }

    #[test]
    fn test_flag_changes_only_target() {
        let mut grid = fixture();
        let before = snapshot(&grid);
        let mut updates = Vec::new();

        let outcome = grid.apply(parse("flag 3,3").unwrap(), &mut updates);
        assert_eq!(outcome, Ok(Outcome::Continue));

        let target = grid.index(Pos::new(3, 3)).unwrap();
        let after = snapshot(&grid);
        for (index, (old, new)) in before.iter().zip(&after).enumerate() {
            if index == target {
                assert_eq!(*new, DisplayState::Flagged);
            } else {
                assert_eq!(old, new);
            }
        }
        assert!(grid.cells[target].flagged);
        assert_eq!(updates.len(), 1);
    }

    #[test]
    fn test_flag_is_allowed_on_uncovered_cell() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        grid.apply(parse("reveal 0,4").unwrap(), &mut updates).unwrap();
        assert_eq!(
            grid.get(Pos::new(0, 4)).unwrap().display,
            DisplayState::RevealedNumber(1)
        );

        grid.apply(parse("flag 0,4").unwrap(), &mut updates).unwrap();
        assert_eq!(grid.get(Pos::new(0, 4)).unwrap().display, DisplayState::Flagged);
    }

    #[test]
    fn test_reveal_mine_is_loser_without_mutation() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        assert_eq!(grid.apply(parse("reveal 0,5").unwrap(), &mut updates), Ok(Outcome::Loser));
        assert!(updates.is_empty());
        assert!(grid.cells.iter().all(|cell| cell.display == DisplayState::Hidden));
    }

    #[test]
    fn test_reveal_numbered_cell_does_not_spread() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        let outcome = grid.apply(parse("reveal 0,4").unwrap(), &mut updates);
        assert_eq!(outcome, Ok(Outcome::Continue));
        assert_eq!(updates.len(), 1);
        assert_eq!(grid.cells_in(DisplayState::Hidden), 63);

        // revealing it again changes nothing
        updates.clear();
        grid.apply(parse("reveal 0,4").unwrap(), &mut updates).unwrap();
        assert!(updates.is_empty());
    }

    #[test]
    fn test_reveal_zero_cell_cascades() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        assert_eq!(grid.get(Pos::new(3, 0)).unwrap().adjacent, 0);
        let outcome = grid.apply(parse("reveal 3,0").unwrap(), &mut updates);

        assert_eq!(outcome, Ok(Outcome::Continue));
        assert_eq!(updates.len(), 27);
        assert_eq!(grid.cells_in(DisplayState::Hidden), 64 - 27);
        assert_eq!(grid.get(Pos::new(3, 0)).unwrap().display, DisplayState::RevealedEmpty);
        assert_eq!(grid.get(Pos::new(7, 0)).unwrap().display, DisplayState::RevealedEmpty);
        assert_eq!(
            grid.get(Pos::new(2, 0)).unwrap().display,
            DisplayState::RevealedNumber(1)
        );
        assert!(grid.cells.iter().all(|cell| !cell.mined || cell.display == DisplayState::Hidden));
    }

    #[test]
    fn test_reveal_flagged_mine_is_loser() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        grid.apply(parse("flag 0,5").unwrap(), &mut updates).unwrap();
        updates.clear();

        let outcome = grid.apply(parse("reveal 0,5").unwrap(), &mut updates);
        assert_eq!(outcome, Ok(Outcome::Loser));
        assert!(updates.is_empty());
        assert_eq!(grid.get(Pos::new(0, 5)).unwrap().display, DisplayState::Flagged);
    }

    #[test]
    fn test_reveal_flagged_safe_cells_uncovers_them() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        grid.apply(parse("flag 0,4").unwrap(), &mut updates).unwrap();
        grid.apply(parse("flag 3,0").unwrap(), &mut updates).unwrap();
        updates.clear();

        let outcome = grid.apply(parse("reveal 0,4").unwrap(), &mut updates);
        assert_eq!(outcome, Ok(Outcome::Continue));
        assert_eq!(
            grid.get(Pos::new(0, 4)).unwrap().display,
            DisplayState::RevealedNumber(1)
        );

        updates.clear();
        let outcome = grid.apply(parse("reveal 3,0").unwrap(), &mut updates);
        assert_eq!(outcome, Ok(Outcome::Continue));
        // (0, 4) sits on the border but is already showing its number
        assert_eq!(updates.len(), 26);
        assert_eq!(grid.get(Pos::new(3, 0)).unwrap().display, DisplayState::RevealedEmpty);
    }

    #[test]
    fn test_reveal_numbered_corner_of_fixture() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        // (1, 1) holds a mine, so the corner is a border cell, not a zero cell
        let outcome = grid.apply(parse("reveal 0,0").unwrap(), &mut updates);
        assert_eq!(outcome, Ok(Outcome::Continue));
        assert_eq!(
            grid.get(Pos::new(0, 0)).unwrap().display,
            DisplayState::RevealedNumber(1)
        );
        assert_eq!(updates.len(), 1);
        assert_eq!(grid.cells_in(DisplayState::Hidden), 63);
    }

    #[test]
    fn test_quit_touches_nothing() {
        let mut grid = fixture();
        let mut updates = Vec::new();

        assert_eq!(grid.apply(Command::Quit, &mut updates), Ok(Outcome::Quit));
        assert!(updates.is_empty());
        assert_eq!(grid.cells_in(DisplayState::Hidden), 64);
    }

    #[test]
    fn test_last_move_reports_done() {
        // single mine in the corner of a 3x3 board
        let mut grid = Grid::with_mines(3, &[8]).unwrap();
        let mut updates = Vec::new();

        assert_eq!(grid.apply(parse("reveal 0,0").unwrap(), &mut updates), Ok(Outcome::Continue));
        assert_eq!(grid.cells_in(DisplayState::Hidden), 1);
        assert_eq!(grid.apply(parse("flag 2,2").unwrap(), &mut updates), Ok(Outcome::Done));
    }
}
