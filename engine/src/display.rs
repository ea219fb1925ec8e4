//! Text and JSON rendering of a [`GridView`].

use std::fmt::Write;

use minesweeper_common::{
    models::Cell,
    protocol::{GridView, Outcome},
};

pub const TITLE: &str = "WELCOME TO MINESWEEPER!";
pub const HELP: &str = "COMMANDS: reveal x,y  OR  flag x,y  OR  quit";

fn glyph(cell: &Cell) -> String {
    match cell {
        Cell::Hidden => "H".to_string(),
        Cell::Flagged => "!".to_string(),
        Cell::Empty => " ".to_string(),
        Cell::Number { adjacent } => adjacent.to_string(),
        Cell::Mine => "B".to_string(),
    }
}

/// Header, column labels (`x`), then one labelled row per `y`.
pub fn render(view: &GridView) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "{TITLE}\n");
    let _ = writeln!(out, "{HELP}\n");
    let _ = writeln!(out, "Gridsize: {}", view.size);
    let _ = writeln!(out, "Mines: {}\n", view.mines);

    out.push_str("     ");
    for x in 0..view.size {
        let _ = write!(out, "{x:^5}");
    }
    out.push_str("\n    ");
    out.push_str(&"-".repeat(5 * view.size));

    for (y, row) in view.field.iter().enumerate() {
        let _ = write!(out, "\n{y:>3} |");
        for cell in row {
            let _ = write!(out, "{:^5}", glyph(cell));
        }
    }
    out.push('\n');

    out
}

pub fn render_json(view: &GridView) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

/// Line shown under the board after a command, if any.
pub fn banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Quit => Some("You quitter!"),
        Outcome::Error => Some("BAD COMMAND, TRY AGAIN"),
        Outcome::Done => Some("YOU'RE AMAZING!  YOU WON!!!"),
        Outcome::Loser => Some("BOOM!  G A M E   O V E R !"),
        Outcome::Continue => None,
    }
}
