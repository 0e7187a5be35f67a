//! Command-line surface: argument parsing and the request handler.

mod app;
mod main;

pub use app::*;
pub use main::*;
