//! Decorative Preview Grid
//!
//! Random dot pattern drawn in the foreground colour. It does not encode
//! anything.

/// Cells per side
pub const GRID_SIDE: usize = 8;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Sample a fresh pattern. `sample` yields uniform values in `[0, 1)`; a
/// cell is filled when its sample is above one half.
pub fn sample_cells(mut sample: impl FnMut() -> f64) -> Vec<bool> {
    (0..GRID_CELLS).map(|_| sample() > 0.5).collect()
}

/// CSS colour for one cell
pub fn cell_color(filled: bool, foreground: &str) -> &str {
    if filled { foreground } else { "transparent" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_64_cells() {
        assert_eq!(sample_cells(|| 0.7).len(), 64);
    }

    #[test]
    fn test_threshold() {
        assert!(sample_cells(|| 0.51).iter().all(|filled| *filled));
        assert!(sample_cells(|| 0.5).iter().all(|filled| !*filled));
    }

    #[test]
    fn test_cells_sampled_independently() {
        let mut n = 0u32;
        let cells = sample_cells(|| {
            n += 1;
            if n % 2 == 0 { 0.9 } else { 0.1 }
        });
        assert!(!cells[0]);
        assert!(cells[1]);
        assert_eq!(cells.iter().filter(|c| **c).count(), 32);
    }

    #[test]
    fn test_cell_color() {
        assert_eq!(cell_color(true, "#006747"), "#006747");
        assert_eq!(cell_color(false, "#006747"), "transparent");
    }
}
