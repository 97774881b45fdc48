mod algorithm;
mod cell;
mod grid;
mod patterns;
mod rules;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::Ruleset;
