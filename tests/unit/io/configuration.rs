//! Tests for cell values, the search pattern and display constants

#[cfg(test)]
mod tests {
    use jigsaw_tiles::io::configuration::{
        ACTIVE_CELL, ACTIVE_COLOR, BACKGROUND_CELL, BACKGROUND_COLOR, CONSUMED_CELL,
        CONSUMED_COLOR, IMAGE_SUFFIX, INPUT_EXTENSION, MAX_INDIVIDUAL_PROGRESS_BARS,
        MIN_TILE_SIDE, PIXEL_SCALE, PROGRESS_BAR_WIDTH, SEA_MONSTER, TILE_HEADER_PREFIX,
    };

    // Tests the three cell values are distinct
    // Verified by setting the marker equal to the active cell
    #[test]
    fn test_cell_values_distinct() {
        assert_eq!(ACTIVE_CELL, b'#');
        assert_eq!(BACKGROUND_CELL, b'.');
        assert_eq!(CONSUMED_CELL, b'O');
    }

    // Tests the sea monster rows are equally wide and hold fifteen active cells
    // Verified by trimming trailing spaces from the first row
    #[test]
    fn test_sea_monster_shape() {
        assert!(SEA_MONSTER.iter().all(|row| row.len() == 20));
        let active: usize = SEA_MONSTER
            .iter()
            .map(|row| row.bytes().filter(|&cell| cell == ACTIVE_CELL).count())
            .sum();
        assert_eq!(active, 15);
    }

    // Tests input settings
    // Verified by changing constant values
    #[test]
    fn test_input_settings() {
        assert_eq!(MIN_TILE_SIDE, 3);
        assert_eq!(TILE_HEADER_PREFIX, "Tile");
        assert_eq!(INPUT_EXTENSION, "txt");
    }

    // Tests progress display values
    // Verified by changing constant values
    #[test]
    fn test_progress_settings() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(PROGRESS_BAR_WIDTH, 30);
    }

    // Tests export colours are opaque and distinguishable
    // Verified by reusing the background colour for active cells
    #[test]
    fn test_export_settings() {
        assert_eq!(IMAGE_SUFFIX, "_image");
        assert!(PIXEL_SCALE > 0);
        for color in [BACKGROUND_COLOR, ACTIVE_COLOR, CONSUMED_COLOR] {
            assert_eq!(color[3], 255);
        }
        assert_ne!(BACKGROUND_COLOR, ACTIVE_COLOR);
        assert_ne!(ACTIVE_COLOR, CONSUMED_COLOR);
    }
}
