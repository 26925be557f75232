use std::collections::BTreeSet;

use life_engine::{BORN, DEAD, Grid, PATTERNS, patterns};
use rand::{SeedableRng, rngs::SmallRng};

fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::empty(rows, cols);
    for &(row, col) in live {
        assert!(grid.set(row, col, BORN));
    }
    grid
}

fn live_set(grid: &Grid) -> BTreeSet<(usize, usize)> {
    grid.live_cells().map(|(row, col, _)| (row, col)).collect()
}

fn advance(grid: &Grid, generations: usize) -> Grid {
    (0..generations).fold(grid.clone(), |g, _| g.next_generation())
}

#[test]
fn dead_grids_stay_dead() {
    for (rows, cols) in [(0, 0), (0, 4), (4, 0), (1, 1), (1, 7), (3, 3), (16, 9)] {
        let grid = Grid::empty(rows, cols);
        assert_eq!(grid.next_generation(), grid, "{rows}x{cols}");
    }
}

#[test]
fn lonely_cell_dies() {
    let grid = grid_with(7, 7, &[(3, 3)]);
    assert_eq!(grid.next_generation().population(), 0);
}

#[test]
fn block_is_still_life() {
    let block = grid_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    let mut grid = block.clone();
    for _ in 0..10 {
        grid = grid.next_generation();
        assert_eq!(grid, block);
    }
}

#[test]
fn blinker_has_period_two() {
    let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

    let first = horizontal.next_generation();
    assert_eq!(live_set(&first), BTreeSet::from([(1, 2), (2, 2), (3, 2)]));
    assert_eq!(first.get(2, 2), Some(2));
    assert_eq!(first.get(1, 2), Some(BORN));

    let second = first.next_generation();
    assert_eq!(live_set(&second), live_set(&horizontal));
    assert_eq!(advance(&second, 2), second);
}

#[test]
fn corners_wrap_in_both_axes() {
    let (rows, cols) = (5, 6);
    let corners = [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)];

    for &live in &corners {
        let grid = grid_with(rows, cols, &[live]);
        for &other in corners.iter().filter(|&&c| c != live) {
            assert_eq!(grid.count_neighbors(other.0, other.1), 1, "{live:?} -> {other:?}");
        }
    }
}

#[test]
fn glider_circles_the_torus() {
    let glider = PATTERNS.iter().find(|p| p.name == "Glider").unwrap();
    let mut grid = Grid::empty(8, 8);
    patterns::stamp(&mut grid, glider);
    let start = live_set(&grid);

    // One cell diagonally every 4 generations, 8 cells to come back around
    let after_four = advance(&grid, 4);
    let shifted: BTreeSet<_> = start.iter().map(|&(r, c)| ((r + 1) % 8, (c + 1) % 8)).collect();
    assert_eq!(live_set(&after_four), shifted);

    assert_eq!(live_set(&advance(&grid, 32)), start);
}

#[test]
fn toggle_twice_restores_cell() {
    let mut grid = grid_with(4, 4, &[(1, 1)]);
    let original = grid.clone();

    assert!(grid.toggle(2, 3));
    assert_eq!(grid.get(2, 3), Some(BORN));
    assert!(grid.toggle(2, 3));
    assert_eq!(grid.get(2, 3), Some(DEAD));
    assert_eq!(grid, original);

    for (row, col) in [(-1, 0), (0, -1), (4, 0), (0, 4), (-7, 99)] {
        assert!(!grid.toggle(row, col));
    }
    assert_eq!(grid, original);
}

#[test]
fn resize_grows_and_truncates() {
    let live = [(0, 0), (0, 4), (2, 2), (3, 1), (3, 4)];
    let mut grid = grid_with(4, 5, &live);
    grid.set(2, 2, 2);

    let bigger = grid.resized(9, 11);
    for row in 0..9 {
        for col in 0..11 {
            let expected = if row < 4 && col < 5 { grid.get(row, col) } else { Some(DEAD) };
            assert_eq!(bigger.get(row, col), expected, "({row}, {col})");
        }
    }

    let smaller = grid.resized(3, 3);
    assert_eq!((smaller.rows(), smaller.cols()), (3, 3));
    assert_eq!(live_set(&smaller), BTreeSet::from([(0, 0), (2, 2)]));
    assert_eq!(smaller.get(2, 2), Some(2));
}

#[test]
fn random_density_extremes() {
    let mut rng = SmallRng::seed_from_u64(42);

    let none = Grid::random(12, 17, 0.0, &mut rng);
    assert_eq!(none.population(), 0);

    let all = Grid::random(12, 17, 1.0, &mut rng);
    assert_eq!(all.population(), 12 * 17);
    assert!(all.live_cells().all(|(_, _, value)| value == BORN));
}

#[test]
fn random_density_is_roughly_respected() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    let grid = Grid::random(100, 100, 0.30, &mut rng);
    let population = grid.population();
    assert!((2_500..=3_500).contains(&population), "population {population}");
}
