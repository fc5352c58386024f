//! MTR Light Rail departure board.
//!
//! A terminal application that polls the public Next Train API for
//! the selected station and renders per-platform route listings, with
//! a client-side station search.

pub mod board;
pub mod directory;
pub mod domain;
pub mod schedule;
pub mod ui;
