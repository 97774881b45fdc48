use super::config::{EngineConfig, Fill};
use crate::domain::{Algorithm, Grid, Ruleset, presets};
use rand::Rng;
use thiserror::Error;

/// Errors surfaced by engine construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be positive (got {rows} x {cols})")]
    InvalidDimension { rows: usize, cols: usize },
}

/// AutomatonEngine owns the current grid and coordinates stepping, pattern
/// stamping and ruleset selection. It is the application layer over the
/// domain logic: a tick source calls [`step`](AutomatonEngine::step) at its
/// own cadence, a renderer reads the settled grid in between.
#[derive(Clone, Debug)]
pub struct AutomatonEngine {
    grid: Grid,
    ruleset: Ruleset,
    algorithm: Algorithm,
    generation: u64,
}

impl AutomatonEngine {
    /// Create an engine from the given configuration with an all-dead grid.
    /// A `Fill::Random` configuration needs a random source; use
    /// [`AutomatonEngine::with_rng`] for that.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        if config.rows == 0 || config.cols == 0 {
            return Err(EngineError::InvalidDimension {
                rows: config.rows,
                cols: config.cols,
            });
        }

        Ok(Self {
            grid: Grid::new(config.rows, config.cols),
            ruleset: config.ruleset,
            algorithm: config.algorithm,
            generation: 0,
        })
    }

    /// Create an engine from the given configuration, drawing the initial
    /// grid from `rng` when a random fill is requested. Seeded generators
    /// reproduce the same starting grid.
    pub fn with_rng<R: Rng + ?Sized>(
        config: &EngineConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(config)?;
        if let Fill::Random { density } = config.fill {
            engine.grid.randomize(density, rng);
        }
        Ok(engine)
    }

    /// Advance the simulation by one generation. The next grid is computed
    /// in full before it replaces the current one, so observers never see a
    /// partially-updated generation.
    pub fn step(&mut self) {
        self.grid = match self.algorithm {
            Algorithm::Serial => self.grid.evolve(self.ruleset),
            Algorithm::Parallel => self.grid.evolve_parallel(self.ruleset),
        };
        self.generation += 1;
    }

    /// Stamp a preset pattern with its top-left corner at the anchor cell,
    /// wrapping toroidally. Stamping is additive; cells outside the pattern
    /// keep their state. Unknown pattern names are ignored.
    pub fn stamp_pattern(&mut self, name: &str, anchor_row: usize, anchor_col: usize) {
        if let Some(pattern) = presets::find(name) {
            pattern.stamp_onto(&mut self.grid, anchor_row, anchor_col);
        }
    }

    /// Flip a single cell between dead and alive (interactive painting)
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    /// Reset every cell to dead and the generation counter to zero,
    /// preserving dimensions, ruleset and algorithm
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Replace the active ruleset; takes effect on the next step
    pub fn set_ruleset(&mut self, ruleset: Ruleset) {
        self.ruleset = ruleset;
    }

    /// Replace the active ruleset by configuration name. Unknown names
    /// leave the active ruleset unchanged; callers wanting strictness can
    /// parse with [`Ruleset::from_name`] themselves.
    pub fn set_ruleset_by_name(&mut self, name: &str) {
        if let Some(ruleset) = Ruleset::from_name(name) {
            self.ruleset = ruleset;
        }
    }

    /// Select how subsequent steps are computed
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// The current, fully-settled grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps taken since construction or the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The active ruleset
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// The active step algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine(rows: usize, cols: usize) -> AutomatonEngine {
        AutomatonEngine::new(&EngineConfig::new(rows, cols)).unwrap()
    }

    #[test]
    fn test_fresh_engine_is_all_dead() {
        for (rows, cols) in [(1, 1), (5, 5), (12, 30)] {
            let engine = engine(rows, cols);
            assert_eq!(engine.dimensions(), (rows, cols));
            assert_eq!(engine.grid().count_alive(), 0);
            assert_eq!(engine.generation(), 0);
        }
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        for (rows, cols) in [(0, 10), (10, 0), (0, 0)] {
            let config = EngineConfig::new(rows, cols);
            let err = AutomatonEngine::new(&config).unwrap_err();
            assert_eq!(err, EngineError::InvalidDimension { rows, cols });
        }
    }

    #[test]
    fn test_with_rng_is_seed_deterministic() {
        let config = EngineConfig {
            fill: Fill::random(),
            ..EngineConfig::new(20, 20)
        };

        let a = AutomatonEngine::with_rng(&config, &mut ChaCha8Rng::seed_from_u64(89)).unwrap();
        let b = AutomatonEngine::with_rng(&config, &mut ChaCha8Rng::seed_from_u64(89)).unwrap();
        assert_eq!(a.grid(), b.grid());

        // 1-in-4 density lands well away from the extremes on 400 cells
        let alive = a.grid().count_alive();
        assert!(alive > 40 && alive < 160, "implausible density: {alive}/400");
    }

    #[test]
    fn test_with_rng_empty_fill_ignores_rng() {
        let config = EngineConfig::new(8, 8);
        let engine =
            AutomatonEngine::with_rng(&config, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(engine.grid().count_alive(), 0);
    }

    #[test]
    fn test_glider_stamp_on_five_by_five() {
        let mut engine = engine(5, 5);
        engine.toggle_cell(4, 4);

        engine.stamp_pattern("glider", 0, 0);

        let expected = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2), (4, 4)];
        for (row, col, cell) in engine.grid().iter_cells() {
            assert_eq!(cell.is_alive(), expected.contains(&(row, col)));
        }
    }

    #[test]
    fn test_unknown_pattern_is_a_no_op() {
        let mut engine = engine(6, 6);
        engine.stamp_pattern("glider", 1, 1);
        let before = engine.grid().clone();

        engine.stamp_pattern("gliderr", 0, 0);
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_step_counts_generations() {
        let mut engine = engine(5, 5);
        engine.stamp_pattern("blinker", 1, 1);

        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);

        engine.clear();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.grid().count_alive(), 0);
    }

    #[test]
    fn test_blinker_returns_after_two_steps() {
        let mut engine = engine(5, 5);
        engine.stamp_pattern("blinker", 1, 1);
        let start = engine.grid().clone();

        engine.step();
        assert_ne!(engine.grid(), &start);

        engine.step();
        assert_eq!(engine.grid(), &start);
    }

    #[test]
    fn test_clear_then_step_stays_dead() {
        for ruleset in Ruleset::all() {
            let mut engine = engine(6, 6);
            engine.set_ruleset(ruleset);
            engine.stamp_pattern("small_exploder", 2, 1);

            engine.clear();
            engine.step();
            assert_eq!(engine.grid().count_alive(), 0);
        }
    }

    #[test]
    fn test_six_neighbors_birth_differs_by_ruleset() {
        // Six of the eight neighbors of (2, 2) alive, center dead
        let neighbors = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1)];

        for (name, born) in [("classic", false), ("alternative", true)] {
            let mut engine = engine(5, 5);
            engine.set_ruleset_by_name(name);
            for &(row, col) in &neighbors {
                engine.toggle_cell(row, col);
            }
            assert_eq!(engine.grid().count_live_neighbors(2, 2), 6);

            engine.step();
            assert_eq!(engine.grid().get(2, 2), Cell::from(born), "ruleset {name}");
        }
    }

    #[test]
    fn test_unknown_ruleset_name_keeps_current() {
        let mut engine = engine(5, 5);
        engine.set_ruleset(Ruleset::Alternative);

        engine.set_ruleset_by_name("voting");
        assert_eq!(engine.ruleset(), Ruleset::Alternative);

        engine.set_ruleset_by_name("classic");
        assert_eq!(engine.ruleset(), Ruleset::Classic);
    }

    #[test]
    fn test_ruleset_takes_effect_on_next_step() {
        let neighbors = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1)];

        let mut engine = engine(5, 5);
        for &(row, col) in &neighbors {
            engine.toggle_cell(row, col);
        }

        engine.set_ruleset(Ruleset::Alternative);
        engine.step();
        assert!(engine.grid().get(2, 2).is_alive());
    }

    #[test]
    fn test_parallel_algorithm_matches_serial() {
        let config = EngineConfig {
            fill: Fill::random(),
            ..EngineConfig::new(32, 32)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut serial = AutomatonEngine::with_rng(&config, &mut rng).unwrap();
        let mut parallel = serial.clone();
        parallel.set_algorithm(Algorithm::Parallel);

        for _ in 0..4 {
            serial.step();
            parallel.step();
            assert_eq!(serial.grid(), parallel.grid());
        }
    }
}
