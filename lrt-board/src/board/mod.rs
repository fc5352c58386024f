//! View controller for the departure board.

mod state;

pub use state::{Board, FetchRequest, Phase};
