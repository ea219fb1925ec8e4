//! Asks the player for the board size and mine count.

use std::io::{self, BufRead, Write};

use minesweeper_common::models::GameParams;
use tracing::{debug, warn};

use crate::{config::Config, error::SetupError};

pub fn validate(
    text: &str,
    min: usize,
    max: usize,
    what: &'static str,
) -> Result<usize, SetupError> {
    let value: usize = text
        .trim()
        .parse()
        .map_err(|_| SetupError::NotANumber(text.trim().to_string()))?;

    if value < min || value > max {
        return Err(SetupError::OutOfBounds {
            what,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Reads grid size and then mine count, asking again while a number is out
/// of range. A non-numeric answer or end of input gives up with `None`.
///
/// The mine count is also capped at the number of cells on the chosen grid.
pub fn read_params<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> io::Result<Option<GameParams>> {
    let Some(size) = ask(
        input,
        output,
        "Enter grid size",
        (config.min_size, config.max_size),
        "grid size",
        "Invalid gridsize!",
    )?
    else {
        return Ok(None);
    };

    let max_mines = config.max_mines.min(size * size);
    let Some(mines) = ask(
        input,
        output,
        "Enter number of mines",
        (config.min_mines, max_mines),
        "mine count",
        "Invalid number of mines!",
    )?
    else {
        return Ok(None);
    };

    Ok(Some(GameParams { size, mines }))
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    (min, max): (usize, usize),
    what: &'static str,
    invalid: &str,
) -> io::Result<Option<usize>> {
    let min = if min > max {
        warn!("Lowest accepted {} {} is above highest {}, using {}", what, min, max, max);
        max
    } else {
        min
    };

    loop {
        write!(output, "{label} (min {min}, max {max}): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match validate(&line, min, max, what) {
            Ok(value) => return Ok(Some(value)),
            Err(err @ SetupError::NotANumber(_)) => {
                debug!("Giving up on setup: {}", err);
                return Ok(None);
            }
            Err(err) => {
                debug!("Asking again: {}", err);
                writeln!(output, "{invalid}")?;
            }
        }
    }
}
