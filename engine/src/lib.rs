//! Single-player minesweeper engine.
//!
//! The core lives in [`data`], [`logic`], [`command`] and [`engine`]: a
//! [`GameEngine`] owns one [`data::Grid`] and turns text commands into
//! [`Outcome`](minesweeper_common::protocol::Outcome)s. The remaining
//! modules are the thin terminal front end the `minesweeper` binary is
//! built from.

pub mod command;
pub mod config;
pub mod data;
pub mod display;
pub mod engine;
pub mod error;
pub mod logic;
pub mod prompt;

pub use engine::GameEngine;
pub use error::{CommandError, SetupError};
