use super::{Cell, Grid};

/// A named template of cells that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // relative (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            rows,
            cols,
            cells,
        }
    }

    /// Stamp the pattern onto the grid with its top-left corner at the
    /// anchor cell. Offsets wrap toroidally through the grid accessors.
    /// Stamping only sets cells alive; live cells outside the pattern keep
    /// their state.
    pub fn stamp_onto(&self, grid: &mut Grid, anchor_row: usize, anchor_col: usize) {
        for &(dr, dc) in &self.cells {
            grid.set(anchor_row + dr, anchor_col + dc, Cell::Alive);
        }
    }
}

/// Preset pattern library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        )
    }

    /// Small exploder - symmetric seed that blows up into a larger structure
    pub fn small_exploder() -> Pattern {
        Pattern::new(
            "small_exploder",
            "Symmetric explosion seed",
            vec![(1, 0), (0, 1), (1, 1), (2, 1), (0, 2), (2, 2), (1, 3)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), small_exploder(), blinker(), block()]
    }

    /// Look up a preset by name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name == name)
    }
}
