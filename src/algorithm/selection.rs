use crate::spatial::{Orientation, PipeGrid};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Find the undecided cells closest to being forced
///
/// Recomputes the frontier from the grid, takes the minimum remaining option
/// count across it, and returns every frontier cell sitting at that minimum.
/// An empty result means the board is stable.
pub fn lowest_entropy_candidates(grid: &PipeGrid) -> Vec<usize> {
    let mut minimum = usize::MAX;
    let mut candidates = Vec::new();

    for cell in grid.cells() {
        let entropy = cell.entropy();
        if entropy < 2 {
            continue;
        }
        if entropy < minimum {
            minimum = entropy;
            candidates.clear();
        }
        if entropy == minimum {
            candidates.push(cell.id());
        }
    }

    candidates
}

/// Seeded random selector for reproducible stochastic choices
///
/// The tie-break among minimal-entropy cells and the orientation pick during
/// collapse are both uniform; any candidate is equally eligible. Seeding makes
/// whole runs replayable.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random index into a collection of `count` elements
    ///
    /// Returns 0 for an empty collection; callers guard emptiness themselves.
    pub fn uniform_index(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        self.rng.random_range(0..count)
    }

    /// Pick one cell index uniformly at random from the candidate list
    pub fn pick_cell(&mut self, candidates: &[usize]) -> Option<usize> {
        let chosen = self.uniform_index(candidates.len());
        candidates.get(chosen).copied()
    }

    /// Pick one orientation uniformly at random from the remaining candidates
    pub fn pick_orientation(&mut self, options: &[Orientation]) -> Option<Orientation> {
        let chosen = self.uniform_index(options.len());
        options.get(chosen).copied()
    }
}
