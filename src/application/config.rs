use crate::domain::{Algorithm, Ruleset};

/// Default fill probability: one alive cell in four.
pub const DEFAULT_FILL_DENSITY: f64 = 0.25;

/// How the initial grid is populated
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// All cells start dead
    Empty,
    /// Each cell independently alive with the given probability
    Random { density: f64 },
}

impl Fill {
    /// Random fill at the default density
    pub const fn random() -> Self {
        Fill::Random {
            density: DEFAULT_FILL_DENSITY,
        }
    }
}

/// Configuration handed in by the embedding application.
/// The engine reads no ambient state; everything it needs arrives here.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub fill: Fill,
    pub ruleset: Ruleset,
    pub algorithm: Algorithm,
}

impl EngineConfig {
    /// Configuration with the given dimensions and the default behavior
    /// (empty grid, classic ruleset, serial stepping)
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            fill: Fill::Empty,
            ruleset: Ruleset::default(),
            algorithm: Algorithm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = EngineConfig::new(30, 40);

        assert_eq!((config.rows, config.cols), (30, 40));
        assert_eq!(config.fill, Fill::Empty);
        assert_eq!(config.ruleset, Ruleset::Classic);
        assert_eq!(config.algorithm, Algorithm::Serial);
    }

    #[test]
    fn test_default_density() {
        assert_eq!(
            Fill::random(),
            Fill::Random { density: 0.25 },
        );
    }
}
