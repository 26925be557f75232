// grid.rs - Toroidal grid and the B3/S23 generation rule

use rand::Rng;

/// A cell value. 0 is dead, anything positive is alive and holds the
/// neighbor count that kept it alive (only used for coloring).
pub type Cell = u8;
pub type TRow = Vec<Cell>;

pub const DEAD: Cell = 0;
/// Value given to births, manual toggles and random fills.
pub const BORN: Cell = 3;

/// Row/column offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<TRow>,
}

impl Grid {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![DEAD; cols]; rows],
        }
    }

    /// Fills a fresh grid, each cell independently alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let mut grid = Self::empty(rows, cols);
        for cell in grid.cells.iter_mut().flatten() {
            if rng.random_bool(density) {
                *cell = BORN;
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Writes `value` at (row, col). Returns false when the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell > DEAD)
    }

    /// Counts live cells around (row, col), wrapping both axes.
    ///
    /// On an axis of extent 1 or 2 the wrap can land on the cell itself or
    /// visit the same neighbor twice; that is counted as is.
    ///
    /// An empty grid has no neighbors to count and gives 0; otherwise `row`
    /// and `col` must be inside the grid.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        if self.rows == 0 || self.cols == 0 {
            return 0;
        }
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let mut count = 0;

        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let nr = ((row as isize + dr + rows) % rows) as usize;
            let nc = ((col as isize + dc + cols) % cols) as usize;
            if self.cells[nr][nc] > DEAD {
                count += 1;
            }
        }
        count
    }

    /// Computes the following generation into a fresh grid.
    ///
    /// Neighbor counts are read from `self` only, so every cell sees the
    /// previous generation unchanged.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::empty(self.rows, self.cols);
        if self.rows == 0 || self.cols == 0 {
            return next;
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = self.count_neighbors(row, col);
                let alive = self.cells[row][col] > DEAD;

                next.cells[row][col] = match (alive, count) {
                    (true, 2) | (true, 3) => count, // Survival
                    (false, 3)            => BORN,  // Birth
                    _                     => DEAD,  // Death or stays dead
                };
            }
        }
        next
    }

    /// Flips the cell at (row, col). Positions outside the grid are ignored.
    ///
    /// Returns true if a cell changed.
    pub fn toggle(&mut self, row: i64, col: i64) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = if *cell > DEAD { DEAD } else { BORN };
                true
            }
            None => false,
        }
    }

    /// Copies the overlapping top-left region into a fresh `new_rows x new_cols` grid.
    pub fn resized(&self, new_rows: usize, new_cols: usize) -> Grid {
        let mut next = Grid::empty(new_rows, new_cols);
        let keep = self.cols.min(new_cols);
        for (row, old) in self.cells.iter().take(new_rows).enumerate() {
            next.cells[row][..keep].copy_from_slice(&old[..keep]);
        }
        next
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell > DEAD).count()
    }

    /// Every live cell as (row, col, value), row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell > DEAD)
                .map(move |(col, &cell)| (row, col, cell))
        })
    }
}
