//! Tests for the frontier-driven generator and its retry loop

#[cfg(test)]
mod tests {
    use pipetile::GenerationError;
    use pipetile::algorithm::executor::{GeneratorConfig, GrowthEvent, PipeGenerator};
    use pipetile::algorithm::selection::RandomSelector;
    use pipetile::analysis::validation;
    use pipetile::spatial::TileGrid;
    use pipetile::spatial::tiles::{TileCatalog, TileId};

    fn generator(min_size: usize, max_attempts: usize) -> PipeGenerator {
        PipeGenerator::new(
            TileCatalog::reference(),
            GeneratorConfig {
                min_size,
                max_attempts,
            },
        )
        .unwrap_or_else(|e| unreachable!("{e}"))
    }

    fn grid(width: usize) -> TileGrid {
        TileGrid::new(width).unwrap_or_else(|e| unreachable!("{e}"))
    }

    // Tests zero attempts is rejected up front
    // Verified by removing the max_attempts check
    #[test]
    fn test_new_rejects_zero_attempts() {
        let result = PipeGenerator::new(
            TileCatalog::reference(),
            GeneratorConfig {
                min_size: 1,
                max_attempts: 0,
            },
        );
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "max_attempts",
                ..
            })
        ));
    }

    // Tests the generator keeps the settings it was built with
    // Verified by returning the default configuration
    #[test]
    fn test_config_reports_settings() {
        let generator = generator(12, 40);
        assert_eq!(
            generator.config(),
            GeneratorConfig {
                min_size: 12,
                max_attempts: 40,
            }
        );
    }

    // Tests begin seeds only the center with the start shape
    // Verified by seeding index 0 instead of the center
    #[test]
    fn test_begin_places_start_tile() {
        let mut generator = generator(1, 1);
        let mut grid = grid(5);
        grid.set(0, TileId::START);

        generator.begin(&mut grid);
        assert_eq!(grid.get(12), TileId::START);
        assert_eq!(grid.placed_count(), 1);
        assert_eq!(generator.frontier_len(), 1);
        assert_eq!(generator.steps(), 0);
    }

    // Tests the first step fills all four neighbors of the start tile
    // Verified by stopping after the first open edge
    #[test]
    fn test_first_step_expands_four_neighbors() {
        let mut generator = generator(1, 1);
        let mut grid = grid(5);
        let mut selector = RandomSelector::new(10);

        generator.begin(&mut grid);
        let more = generator
            .step_one_frontier_cell(&mut grid, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));

        assert!(more);
        assert_eq!(generator.frontier_len(), 4);
        assert_eq!(grid.placed_count(), 5);
        for neighbor in [7, 13, 17, 11] {
            assert!(!grid.get(neighbor).is_empty(), "cell {neighbor} not placed");
        }
        assert!(validation::boundary_violations(&grid).is_empty());
    }

    // Tests stepping with an empty frontier is a no-op
    // Verified by returning true when nothing was popped
    #[test]
    fn test_step_without_frontier() {
        let mut generator = generator(1, 1);
        let mut grid = grid(5);
        let mut selector = RandomSelector::new(10);

        let more = generator
            .step_one_frontier_cell(&mut grid, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert!(!more);
        assert_eq!(grid.placed_count(), 0);
    }

    // Tests the concrete 5x5 scenario with a trivial size guard
    // Verified by placing a different start shape
    #[test]
    fn test_generate_small_grid_scenario() {
        let mut generator = generator(1, 10);
        let mut grid = grid(5);
        let mut selector = RandomSelector::new(10);

        let report = generator
            .generate(&mut grid, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(grid.get(12), TileId::START);
        assert!(grid.placed_count() >= 1);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.placed, grid.placed_count());
        assert_eq!(generator.frontier_len(), 0);
    }

    // Tests every placed cell is expanded exactly once
    // Verified by pushing already placed neighbors onto the frontier
    #[test]
    fn test_grow_steps_equal_placed_count() {
        let mut generator = generator(1, 1);
        let mut grid = grid(12);
        let mut selector = RandomSelector::new(99);

        let placed = generator
            .grow(&mut grid, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(placed, grid.placed_count());
        assert_eq!(generator.steps(), placed);
    }

    // Tests incremental stepping matches a full grow for one seed
    // Verified by popping the frontier from the back
    #[test]
    fn test_incremental_matches_grow() {
        let mut generator = generator(1, 1);
        let mut grown = grid(10);
        let mut selector = RandomSelector::new(5);
        generator
            .grow(&mut grown, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));

        let mut stepped = grid(10);
        let mut selector = RandomSelector::new(5);
        generator.begin(&mut stepped);
        let mut guard = 0;
        while generator
            .step_one_frontier_cell(&mut stepped, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"))
        {
            guard += 1;
            assert!(guard <= stepped.total_size());
        }

        assert_eq!(grown, stepped);
    }

    // Tests the guard retries until the size threshold is met
    // Verified by accepting the first attempt unconditionally
    #[test]
    fn test_generate_meets_min_size() {
        let mut generator = generator(35, 1_000);
        let mut grid = grid(20);
        let mut selector = RandomSelector::new(10);

        let report = generator
            .generate(&mut grid, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert!(grid.placed_count() >= 35);
        assert!(report.attempts >= 1);
        assert!(validation::validate(&grid).is_ok());
    }

    // Tests exhaustion produces a structured error
    // Verified by looping without an attempt bound
    #[test]
    fn test_generate_exhausts_attempts() {
        // Dead ends dominate the draws, so no attempt comes close to filling the grid
        let weights = [1, 10_000, 10_000, 1, 10_000, 1, 1, 1, 10_000, 1, 1, 1, 1, 1, 1, 1];
        let catalog = TileCatalog::with_weights(weights).unwrap_or_else(|e| unreachable!("{e}"));
        let mut generator = PipeGenerator::new(
            catalog,
            GeneratorConfig {
                min_size: 25,
                max_attempts: 3,
            },
        )
        .unwrap_or_else(|e| unreachable!("{e}"));
        let mut grid = grid(5);
        let mut selector = RandomSelector::new(1);

        let result = generator.generate(&mut grid, &mut selector);
        match result {
            Err(GenerationError::AttemptsExhausted {
                attempts,
                min_size,
                best,
            }) => {
                assert_eq!(attempts, 3);
                assert_eq!(min_size, 25);
                assert!(best < 25);
            }
            other => unreachable!("expected exhaustion, got {other:?}"),
        }
    }

    // Tests min size larger than the grid is rejected before generating
    // Verified by removing the for_grid check
    #[test]
    fn test_generate_rejects_unreachable_min_size() {
        let mut generator = generator(26, 3);
        let mut grid = grid(5);
        let mut selector = RandomSelector::new(1);

        let result = generator.generate(&mut grid, &mut selector);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "min_size",
                ..
            })
        ));
    }

    // Tests observer receives the full event sequence
    // Verified by skipping the Started notification
    #[test]
    fn test_generate_with_reports_events() {
        let mut generator = generator(1, 5);
        let mut grid = grid(7);
        let mut selector = RandomSelector::new(8);
        let mut events = Vec::new();

        let report = generator
            .generate_with(&mut grid, &mut selector, |_, event| events.push(event))
            .unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(events.first(), Some(&GrowthEvent::Started { attempt: 1 }));
        assert_eq!(
            events.last(),
            Some(&GrowthEvent::Accepted {
                attempt: 1,
                placed: report.placed
            })
        );
        let steps = events
            .iter()
            .filter(|e| matches!(e, GrowthEvent::Stepped { .. }))
            .count();
        assert_eq!(steps, report.steps);
    }

    // Tests scatter fills every cell from the catalog
    // Verified by leaving the grid untouched
    #[test]
    fn test_scatter_fills_grid() {
        let generator = generator(1, 1);
        let mut grid = grid(6);
        let mut selector = RandomSelector::new(4);

        let placed = generator
            .scatter(&mut grid, &mut selector)
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(placed, grid.placed_count());
        assert!(placed > 0);
    }
}
