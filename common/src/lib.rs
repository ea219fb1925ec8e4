//! Types shared between the minesweeper engine and whatever draws it.
//!
//! `models` holds the plain data (positions, setup parameters, the per-cell
//! view) and `protocol` holds what flows across a single turn: the command
//! going in and the outcome plus changed cells coming back out.

pub mod models;
pub mod protocol;
