//! Tests for pattern construction, occurrence marking and orientation search

#[cfg(test)]
mod tests {
    use jigsaw_tiles::algorithm::pattern::{SearchPattern, find_and_erase};
    use jigsaw_tiles::io::configuration::{ACTIVE_CELL, BACKGROUND_CELL, CONSUMED_CELL};
    use jigsaw_tiles::spatial::grid::CellGrid;
    use jigsaw_tiles::spatial::transforms::Orientation;

    // Background grid with the sea monster drawn at `(row, col)`
    fn with_monster(rows: usize, cols: usize, row: usize, col: usize) -> CellGrid {
        let mut grid = CellGrid::filled(rows, cols, BACKGROUND_CELL).unwrap();
        for &(dr, dc) in SearchPattern::default().offsets() {
            assert!(grid.set(row + dr, col + dc, ACTIVE_CELL));
        }
        grid
    }

    fn checkerboard(size: usize) -> CellGrid {
        let rows: Vec<String> = (0..size)
            .map(|r| {
                (0..size)
                    .map(|c| if (r + c) % 2 == 0 { '#' } else { '.' })
                    .collect()
            })
            .collect();
        CellGrid::from_rows(&rows).unwrap()
    }

    // Tests the default pattern is the fifteen-cell sea monster
    // Verified by dropping the last pattern row
    #[test]
    fn test_default_pattern() {
        let pattern = SearchPattern::default();
        assert_eq!(pattern.active_cells(), 15);
        assert_eq!(pattern.height(), 3);
        assert_eq!(pattern.width(), 20);
        assert_eq!(pattern.offsets()[0], (0, 18));
    }

    // Tests patterns are built from rows of any length
    // Verified by taking the width from the first row only
    #[test]
    fn test_from_rows() {
        let pattern = SearchPattern::from_rows(&["#", ".##"], ACTIVE_CELL).unwrap();
        assert_eq!(pattern.offsets(), &[(0, 0), (1, 1), (1, 2)]);
        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 2);
    }

    // Tests a pattern without active cells is rejected
    // Verified by removing the empty offsets check
    #[test]
    fn test_from_rows_requires_active_cell() {
        assert!(SearchPattern::from_rows(&["...", "   "], ACTIVE_CELL).is_err());
    }

    // Tests occurrences are marked and counted
    // Verified by counting matches without writing the marker
    #[test]
    fn test_mark_occurrences() {
        let pattern = SearchPattern::from_rows(&["##"], ACTIVE_CELL).unwrap();
        let mut grid = CellGrid::from_rows(&["##.##", "....#"]).unwrap();
        let hits = pattern.mark_occurrences(&mut grid, ACTIVE_CELL, CONSUMED_CELL);
        assert_eq!(hits, 2);
        assert_eq!(grid.to_rows(), vec!["OO.OO", "....#"]);
    }

    // Tests overlapping candidates never reuse consumed cells
    // Verified by marking after the full scan instead of immediately
    #[test]
    fn test_overlapping_occurrences_not_reused() {
        let pattern = SearchPattern::from_rows(&["##"], ACTIVE_CELL).unwrap();
        let mut grid = CellGrid::from_rows(&["###"]).unwrap();
        let hits = pattern.mark_occurrences(&mut grid, ACTIVE_CELL, CONSUMED_CELL);
        assert_eq!(hits, 1);
        assert_eq!(grid.to_rows(), vec!["OO#"]);
    }

    // Tests a pattern larger than the grid finds nothing
    // Verified by removing the size guard
    #[test]
    fn test_pattern_larger_than_grid() {
        let mut grid = CellGrid::filled(2, 30, ACTIVE_CELL).unwrap();
        let hits = SearchPattern::default().mark_occurrences(&mut grid, ACTIVE_CELL, CONSUMED_CELL);
        assert_eq!(hits, 0);
        assert_eq!(grid.count(ACTIVE_CELL), 60);
    }

    // Tests a monster in the untransformed image is found at the identity orientation
    // Verified by subtracting the pattern size from the hit count
    #[test]
    fn test_find_in_identity_orientation() {
        let mut composite = with_monster(24, 24, 5, 2);
        composite.set(0, 0, ACTIVE_CELL);
        composite.set(23, 23, ACTIVE_CELL);

        let report = find_and_erase(
            &composite,
            &SearchPattern::default(),
            &Orientation::ALL,
            ACTIVE_CELL,
            CONSUMED_CELL,
        );
        assert_eq!(report.orientation(), Some(Orientation::IDENTITY));
        assert_eq!(report.hits(), 1);
        assert_eq!(report.roughness(), 2);
        assert_eq!(report.image().count(CONSUMED_CELL), 15);
        assert_eq!(report.image().get(5, 20), Some(CONSUMED_CELL));
    }

    // Tests a monster drawn in another orientation is found once the image turns
    // Verified by searching only the identity orientation
    #[test]
    fn test_find_in_rotated_orientation() {
        let upright = with_monster(24, 24, 10, 1);
        let orientation = Orientation::new(1, true);
        let composite = orientation.invert(&upright);

        let report = find_and_erase(
            &composite,
            &SearchPattern::default(),
            &Orientation::ALL,
            ACTIVE_CELL,
            CONSUMED_CELL,
        );
        assert_eq!(report.orientation(), Some(orientation));
        assert_eq!(report.hits(), 1);
        assert_eq!(report.roughness(), 0);
    }

    // Tests two separate monsters are both counted
    // Verified by stopping the scan after the first hit
    #[test]
    fn test_multiple_monsters() {
        let mut composite = with_monster(24, 24, 2, 0);
        for &(dr, dc) in SearchPattern::default().offsets() {
            composite.set(12 + dr, 3 + dc, ACTIVE_CELL);
        }
        let report = find_and_erase(
            &composite,
            &SearchPattern::default(),
            &Orientation::ALL,
            ACTIVE_CELL,
            CONSUMED_CELL,
        );
        assert_eq!(report.hits(), 2);
        assert_eq!(report.roughness(), 0);
    }

    // Tests finding nothing reports the untouched composite and its active count
    // Verified by returning the last orientation tried
    #[test]
    fn test_no_occurrences() {
        let composite = checkerboard(24);
        let report = find_and_erase(
            &composite,
            &SearchPattern::default(),
            &Orientation::ALL,
            ACTIVE_CELL,
            CONSUMED_CELL,
        );
        assert_eq!(report.orientation(), None);
        assert_eq!(report.hits(), 0);
        assert_eq!(report.roughness(), 24 * 24 / 2);
        assert_eq!(report.image(), &composite);
    }
}
