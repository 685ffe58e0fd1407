use crate::{
    algorithm::guard::SizeGuard,
    algorithm::selection::{RandomSelector, compute_viable_shapes_at},
    io::configuration::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_SIZE},
    io::error::{GenerationError, Result, WithContext, invalid_parameter},
    spatial::TileGrid,
    spatial::connectivity::Edge,
    spatial::tiles::{TileCatalog, TileId},
};
use log::{debug, info, warn};
use std::collections::VecDeque;

/// Parameters controlling the size guard and its retry loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Placed tiles a map needs to be accepted
    pub min_size: usize,
    /// Attempts before giving up on reaching `min_size`
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Outcome of an accepted generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Attempts used, including the accepted one
    pub attempts: usize,
    /// Placed tiles in the accepted map
    pub placed: usize,
    /// Frontier cells expanded during the accepted attempt
    pub steps: usize,
}

/// Progress notifications emitted while generating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthEvent {
    /// Grid was reset and the seed cell placed
    Started {
        /// 1-based attempt number
        attempt: usize,
    },
    /// One frontier cell was expanded
    Stepped {
        /// 1-based attempt number
        attempt: usize,
        /// Cells still waiting in the frontier
        frontier: usize,
    },
    /// The finished map was too small and will be discarded
    Rejected {
        /// 1-based attempt number
        attempt: usize,
        /// Placed tiles in the rejected map
        placed: usize,
    },
    /// The finished map passed the size guard
    Accepted {
        /// 1-based attempt number
        attempt: usize,
        /// Placed tiles in the accepted map
        placed: usize,
    },
}

/// Frontier-driven pipe map generator
///
/// Grows a connected network breadth-first from a 4-way tile at the grid
/// center. Every cell reached through an open edge gets a shape drawn by
/// weight from those that agree with all already-placed neighbors and stay
/// closed toward the boundary. The frontier is a FIFO queue, so the order
/// of random draws is fixed for a given seed.
#[derive(Debug, Clone)]
pub struct PipeGenerator {
    catalog: TileCatalog,
    config: GeneratorConfig,
    frontier: VecDeque<usize>,
    steps: usize,
}

impl PipeGenerator {
    /// Create a generator over a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero
    pub fn new(catalog: TileCatalog, config: GeneratorConfig) -> Result<Self> {
        if config.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &config.max_attempts,
                &"at least one attempt is required",
            ));
        }

        Ok(Self {
            catalog,
            config,
            frontier: VecDeque::new(),
            steps: 0,
        })
    }

    /// Shape catalog in use
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Size guard and retry settings
    pub const fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Cells waiting to be expanded
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Frontier cells expanded since the last `begin`
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Reset the grid, place the start tile at the center and queue it
    pub fn begin(&mut self, grid: &mut TileGrid) {
        grid.reset();
        let center = grid.center();
        grid.set(center, TileId::START);

        self.frontier.clear();
        self.frontier.push_back(center);
        self.steps = 0;
    }

    /// Expand the oldest frontier cell
    ///
    /// Fills every empty in-bounds neighbor the cell opens toward, in
    /// top, right, bottom, left order, and queues each new cell. Returns
    /// whether frontier work remains.
    ///
    /// # Errors
    ///
    /// Returns an error if a frontier index lies outside the grid or a
    /// neighbor has no legal shape
    pub fn step_one_frontier_cell(
        &mut self,
        grid: &mut TileGrid,
        selector: &mut RandomSelector,
    ) -> Result<bool> {
        let Some(current) = self.frontier.pop_front() else {
            return Ok(false);
        };

        let shape = grid
            .try_get(current)
            .ok_or(GenerationError::IndexOutOfRange {
                index: current,
                total_size: grid.total_size(),
            })?;

        for direction in shape.edges() {
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            if !grid.try_get(next).is_some_and(TileId::is_empty) {
                continue;
            }

            self.place(grid, next, direction, selector)?;
            self.frontier.push_back(next);
        }

        self.steps += 1;
        Ok(!self.frontier.is_empty())
    }

    /// Draw and place a shape for a cell entered through `direction`
    fn place(
        &self,
        grid: &mut TileGrid,
        index: usize,
        direction: Edge,
        selector: &mut RandomSelector,
    ) -> Result<TileId> {
        let candidates =
            compute_viable_shapes_at(grid, index, self.catalog.inward_candidates(direction));

        let shape = selector
            .choose_shape(&candidates)
            .ok_or(GenerationError::NoCandidates { index, attempt: 0 })?;

        grid.try_set(index, shape.id)?;
        Ok(shape.id)
    }

    /// Run one complete attempt without the size guard
    ///
    /// Returns the number of placed tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell has no legal shape
    pub fn grow(&mut self, grid: &mut TileGrid, selector: &mut RandomSelector) -> Result<usize> {
        self.begin(grid);
        while self.step_one_frontier_cell(grid, selector)? {}
        Ok(grid.placed_count())
    }

    /// Generate a map that passes the size guard
    ///
    /// Failed attempts are discarded and retried on the same random stream,
    /// up to `max_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_size` exceeds the grid's cell count
    /// - A cell has no legal shape
    /// - No attempt reaches `min_size`
    pub fn generate(
        &mut self,
        grid: &mut TileGrid,
        selector: &mut RandomSelector,
    ) -> Result<GenerationReport> {
        self.generate_with(grid, selector, |_, _| {})
    }

    /// Generate like [`Self::generate`], reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::generate`]
    pub fn generate_with(
        &mut self,
        grid: &mut TileGrid,
        selector: &mut RandomSelector,
        mut observer: impl FnMut(&TileGrid, GrowthEvent),
    ) -> Result<GenerationReport> {
        let guard = SizeGuard::for_grid(self.config.min_size, grid)?;
        let mut best = 0;

        for attempt in 1..=self.config.max_attempts {
            self.begin(grid);
            observer(grid, GrowthEvent::Started { attempt });

            loop {
                let more = self
                    .step_one_frontier_cell(grid, selector)
                    .with_attempt(attempt)?;
                observer(
                    grid,
                    GrowthEvent::Stepped {
                        attempt,
                        frontier: self.frontier.len(),
                    },
                );
                if !more {
                    break;
                }
            }

            let placed = grid.placed_count();
            if guard.accept(grid) {
                info!("Made a map with {placed} tiles after {attempt} attempt(s)");
                observer(grid, GrowthEvent::Accepted { attempt, placed });
                return Ok(GenerationReport {
                    attempts: attempt,
                    placed,
                    steps: self.steps,
                });
            }

            debug!(
                "Attempt {attempt}: map too small ({placed} < {})",
                guard.min_size()
            );
            observer(grid, GrowthEvent::Rejected { attempt, placed });
            best = best.max(placed);
        }

        warn!(
            "No map reached {} tiles in {} attempts",
            guard.min_size(),
            self.config.max_attempts
        );
        Err(GenerationError::AttemptsExhausted {
            attempts: self.config.max_attempts,
            min_size: guard.min_size(),
            best,
        })
    }

    /// Fill every cell independently from the full weighted catalog
    ///
    /// Ignores all connectivity rules; a baseline noise map for comparison.
    /// Returns the number of placed tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has no drawable shape
    pub fn scatter(&self, grid: &mut TileGrid, selector: &mut RandomSelector) -> Result<usize> {
        grid.reset();
        let shapes = self.catalog.all_shapes();

        for index in 0..grid.total_size() {
            let shape = selector
                .choose_shape(shapes)
                .ok_or(GenerationError::NoCandidates { index, attempt: 0 })?;
            grid.try_set(index, shape.id)?;
        }

        Ok(grid.placed_count())
    }
}
