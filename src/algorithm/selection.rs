use crate::{
    spatial::TileGrid,
    spatial::connectivity::{Edge, has_edge, retain_matching},
    spatial::tiles::TileShape,
};
use rand::{
    SeedableRng,
    distr::{Distribution, weighted::WeightedIndex},
    rngs::StdRng,
};

/// Determine which shapes can legally be placed at `index`
///
/// Starts from `candidates` and narrows by each of the cell's four sides in
/// turn: a side past the grid boundary must stay closed, a side facing a
/// placed tile must mirror that tile's facing edge, and a side facing an
/// empty cell is left free.
pub fn compute_viable_shapes_at(
    grid: &TileGrid,
    index: usize,
    mut candidates: Vec<TileShape>,
) -> Vec<TileShape> {
    let neighbors = grid.neighbors(index);
    for edge in Edge::ALL {
        match neighbors.on(edge) {
            None => retain_matching(&mut candidates, edge, false),
            Some(neighbor) => match grid.try_get(neighbor) {
                Some(placed) if !placed.is_empty() => {
                    retain_matching(&mut candidates, edge, has_edge(placed, edge.opposite()));
                }
                _ => {}
            },
        }

        if candidates.is_empty() {
            return candidates;
        }
    }

    candidates
}

/// Caller-owned random stream for reproducible stochastic choices
///
/// Every draw made during generation goes through one selector, so a fixed
/// seed reproduces the exact sequence of placed shapes.
#[derive(Debug, Clone)]
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

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic when `seed` is given, entropy-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Restart the stream, from entropy when `seed` is absent
    pub fn reseed(&mut self, seed: Option<u64>) {
        *self = Self::from_seed_option(seed);
    }

    /// Weighted random selection over integer weights
    ///
    /// A single proportional draw: index `i` comes back with probability
    /// `weights[i] / sum(weights)`. Returns `None` for an empty slice or
    /// when every weight is zero.
    pub fn weighted_choice(&mut self, weights: &[u32]) -> Option<usize> {
        let distribution = WeightedIndex::new(weights).ok()?;
        Some(distribution.sample(&mut self.rng))
    }

    /// Draw one shape with probability proportional to its catalog weight
    pub fn choose_shape(&mut self, candidates: &[TileShape]) -> Option<TileShape> {
        let weights: Vec<u32> = candidates.iter().map(|shape| shape.weight).collect();
        self.weighted_choice(&weights)
            .and_then(|i| candidates.get(i))
            .copied()
    }
}
