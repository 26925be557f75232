// patterns.rs - Classic seed patterns, stamped centered on the torus

use crate::grid::{BORN, Grid};

/// A named pattern as (row, col) offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// (height, width) of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(row, col)| (h.max(row + 1), w.max(col + 1)))
    }
}

/// Writes `pattern` onto `grid` centered, wrapping around the edges when it
/// does not fit. Existing cells are left alone.
pub fn stamp(grid: &mut Grid, pattern: &Pattern) {
    let (rows, cols) = (grid.rows(), grid.cols());
    if rows == 0 || cols == 0 {
        return;
    }

    let (height, width) = pattern.extent();
    let top = (rows / 2) as isize - (height / 2) as isize;
    let left = (cols / 2) as isize - (width / 2) as isize;

    for &(row, col) in pattern.cells {
        let r = (top + row as isize).rem_euclid(rows as isize) as usize;
        let c = (left + col as isize).rem_euclid(cols as isize) as usize;
        grid.set(r, c, BORN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    #[test]
    fn extents() {
        assert_eq!(find("glider").map(Pattern::extent), Some((3, 3)));
        assert_eq!(find("Pulsar").map(Pattern::extent), Some((13, 13)));
        assert_eq!(find("Gosper Glider Gun").map(Pattern::extent), Some((9, 36)));
        assert!(find("Spaceship").is_none());
    }

    #[test]
    fn stamp_centers_pattern() {
        let mut grid = Grid::empty(10, 10);
        stamp(&mut grid, find("Blinker").unwrap());
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(5, 4, 3), (5, 5, 3), (5, 6, 3)]);
    }

    #[test]
    fn stamp_wraps_on_small_grid() {
        let gun = find("Gosper Glider Gun").unwrap();
        let mut grid = Grid::empty(20, 20);
        stamp(&mut grid, gun);
        assert!(grid.population() <= gun.cells.len());
        assert!(grid.population() > 0);
    }

    #[test]
    fn stamp_on_empty_grid_is_noop() {
        let mut grid = Grid::empty(0, 4);
        stamp(&mut grid, &PATTERNS[0]);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn every_pattern_fits_default_window() {
        for pattern in PATTERNS {
            let mut grid = Grid::empty(60, 60);
            stamp(&mut grid, pattern);
            assert_eq!(grid.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}
