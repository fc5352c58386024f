//! Terminal user interface.

mod app;
pub mod render;

pub use app::{App, REFRESH_PERIOD};
