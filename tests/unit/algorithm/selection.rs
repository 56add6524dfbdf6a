//! Tests for frontier recomputation and minimal-entropy selection

#[cfg(test)]
mod tests {

    use pipewave::algorithm::selection::{RandomSelector, lowest_entropy_candidates};
    use pipewave::spatial::{OptionSet, Orientation, PipeGrid};

    fn narrow_to(grid: &mut PipeGrid, index: usize, options: &[Orientation]) {
        if let Some(cell) = grid.cell_mut(index) {
            cell.set_options(OptionSet::from_slice(options));
        }
    }

    #[test]
    fn test_fresh_board_ties_every_cell() {
        let grid = PipeGrid::new(2, 2);
        assert_eq!(lowest_entropy_candidates(&grid), vec![0, 1, 2, 3]);
    }

    // Cells closest to being forced take priority over the rest of the
    // frontier
    #[test]
    fn test_minimum_entropy_wins() {
        let mut grid = PipeGrid::new(2, 2);
        narrow_to(
            &mut grid,
            1,
            &[Orientation::Empty, Orientation::North, Orientation::East],
        );
        narrow_to(&mut grid, 3, &[Orientation::Empty, Orientation::South]);

        assert_eq!(lowest_entropy_candidates(&grid), vec![3]);
    }

    #[test]
    fn test_ties_at_the_minimum_are_all_eligible() {
        let mut grid = PipeGrid::new(1, 3);
        narrow_to(&mut grid, 0, &[Orientation::Empty, Orientation::West]);
        narrow_to(&mut grid, 2, &[Orientation::Empty, Orientation::East]);

        assert_eq!(lowest_entropy_candidates(&grid), vec![0, 2]);
    }

    // Decided cells are no longer eligible for collapse
    #[test]
    fn test_decided_cells_are_excluded() {
        let mut grid = PipeGrid::new(1, 2);
        narrow_to(&mut grid, 0, &[Orientation::Empty]);

        assert_eq!(lowest_entropy_candidates(&grid), vec![1]);
    }

    #[test]
    fn test_stable_board_yields_no_candidates() {
        let mut grid = PipeGrid::new(1, 2);
        narrow_to(&mut grid, 0, &[Orientation::Empty]);
        narrow_to(&mut grid, 1, &[Orientation::Empty]);

        assert!(lowest_entropy_candidates(&grid).is_empty());
    }

    #[test]
    fn test_selector_is_deterministic_for_a_seed() {
        let mut first = RandomSelector::new(11);
        let mut second = RandomSelector::new(11);

        for _ in 0..32 {
            assert_eq!(first.uniform_index(7), second.uniform_index(7));
        }
    }

    #[test]
    fn test_pick_cell_stays_within_the_candidates() {
        let mut selector = RandomSelector::new(5);
        let candidates = vec![2, 9, 14];

        for _ in 0..32 {
            let Some(picked) = selector.pick_cell(&candidates) else {
                unreachable!("a non-empty candidate list always yields a pick");
            };
            assert!(candidates.contains(&picked));
        }
    }

    #[test]
    fn test_empty_collections_yield_nothing() {
        let mut selector = RandomSelector::new(0);
        assert_eq!(selector.pick_cell(&[]), None);
        assert_eq!(selector.pick_orientation(&[]), None);
        assert_eq!(selector.uniform_index(0), 0);
    }

    #[test]
    fn test_pick_orientation_stays_within_the_options() {
        let mut selector = RandomSelector::new(21);
        let options = vec![Orientation::North, Orientation::West];

        for _ in 0..16 {
            let Some(picked) = selector.pick_orientation(&options) else {
                unreachable!("a non-empty option list always yields a pick");
            };
            assert!(options.contains(&picked));
        }
    }
}
