use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::chooser::ColumnChooser;

/// A chooser that picks uniformly at random from every column of the board,
/// full or not.
#[derive(Debug)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        RandomChooser {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic chooser for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnChooser for RandomChooser {
    fn choose_column(&mut self, board: &Board) -> usize {
        self.rng.random_range(0..board.width())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
