//! Shared terminal utilities.
//!
//! Box drawing for help text and ANSI helpers.

mod output;

pub use output::*;
