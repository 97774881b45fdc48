use super::{Cell, rules::Ruleset};
use rand::Rng;
use rayon::prelude::*;

/// Grid manages the 2D cellular automaton state.
/// Dimensions are fixed at construction; every coordinate access wraps
/// modulo the dimensions, so the grid behaves as a torus (the last row and
/// column are adjacent to the first).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Callers must pass non-zero dimensions; the engine validates before
    /// constructing a grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert wrapped 2D coordinates to a flat index
    const fn index(&self, row: usize, col: usize) -> usize {
        (row % self.rows) * self.cols + (col % self.cols)
    }

    /// Get cell at position; coordinates wrap toroidally
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set cell at position; coordinates wrap toroidally
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Flip the cell at position between dead and alive
    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Count live cells among the 8 toroidally-wrapped neighbors of (row, col)
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let r = self.rows as i32;
        let c = self.cols as i32;

        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                // Toroidal wrapping
                let nr = ((row as i32 + dr) % r + r) % r;
                let nc = ((col as i32 + dc) % c + c) % c;
                self.get(nr as usize, nc as usize)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation (serial).
    /// The current grid is left untouched, so a step never exposes a
    /// half-updated generation.
    pub fn evolve(&self, ruleset: Ruleset) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let neighbors = self.count_live_neighbors(row, col);
                ruleset.evolve(self.get(row, col), neighbors)
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel evolution using rayon for large grids.
    /// Produces cell-for-cell identical results to [`Grid::evolve`].
    pub fn evolve_parallel(&self, ruleset: Ruleset) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map(|row| (0..self.cols).into_par_iter().map(move |col| (row, col)))
            .map(|(row, col)| {
                let neighbors = self.count_live_neighbors(row, col);
                ruleset.evolve(self.get(row, col), neighbors)
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Clear all cells to dead state, preserving dimensions
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize the grid: each cell independently alive with probability
    /// `density`. The random source is supplied by the caller so seeded
    /// generators reproduce the same grid.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from(rng.random_bool(density));
        });
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.get(row, col)))
    }
}
