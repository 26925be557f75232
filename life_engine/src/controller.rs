// controller.rs - Simulation state and the operations the UI drives it with

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info, trace};

use crate::config::LifeConfig;
use crate::grid::Grid;
use crate::pacer;
use crate::patterns::{self, PATTERNS};

/// Whether the surface has to be repainted after an operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Needed,
    NotNeeded,
}

impl Redraw {
    pub fn is_needed(self) -> bool {
        self == Redraw::Needed
    }

    fn when(changed: bool) -> Self {
        if changed { Redraw::Needed } else { Redraw::NotNeeded }
    }
}

/// Everything the running visualizer knows. Created once and owned by the host.
pub struct Simulation {
    config: LifeConfig,
    grid: Grid,
    playing: bool,
    speed: u32,
    last_update_ms: f64,
    generation: u64,
    rng: SmallRng,
}

impl Simulation {
    pub fn new(config: LifeConfig) -> Self {
        Self::with_rng(config, SmallRng::from_os_rng())
    }

    /// Deterministic variant for tests and reproducible runs.
    pub fn with_seed(config: LifeConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: LifeConfig, rng: SmallRng) -> Self {
        let speed = config.clamp_speed(config.initial_speed);
        Self {
            config,
            grid: Grid::empty(0, 0),
            playing: false,
            speed,
            last_update_ms: 0.0,
            generation: 0,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn cell_size(&self) -> f32 {
        self.config.cell_size
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    fn last_update_ms(&self) -> f64 {
        self.last_update_ms
    }

    /// Frame callback. Advances one generation when playing and the interval has elapsed.
    pub fn tick(&mut self, now_ms: f64) -> Redraw {
        let outcome = pacer::tick(now_ms, self.last_update_ms, self.speed, self.playing);
        self.last_update_ms = outcome.last_update_ms;
        Redraw::when(outcome.advance && self.advance())
    }

    pub fn toggle_playing(&mut self) -> Redraw {
        self.playing = !self.playing;
        info!(playing = self.playing, generation = self.generation, "play state changed");
        Redraw::Needed
    }

    /// One generation regardless of the play state.
    pub fn step(&mut self) -> Redraw {
        let advanced = self.advance();
        if !advanced {
            debug!("step ignored on empty surface");
        }
        Redraw::when(advanced)
    }

    pub fn clear(&mut self) -> Redraw {
        self.grid = Grid::empty(self.rows(), self.cols());
        self.generation = 0;
        info!(rows = self.rows(), cols = self.cols(), "grid cleared");
        Redraw::Needed
    }

    pub fn randomize(&mut self) -> Redraw {
        self.grid = Grid::random(self.rows(), self.cols(), self.config.density, &mut self.rng);
        self.generation = 0;
        info!(
            density = self.config.density,
            population = self.grid.population(),
            "grid randomized"
        );
        Redraw::Needed
    }

    /// Sets generations per second, clamped to the configured range.
    pub fn set_speed(&mut self, speed: u32) -> Redraw {
        let speed = self.config.clamp_speed(speed);
        if speed != self.speed {
            debug!(from = self.speed, to = speed, "speed changed");
            self.speed = speed;
        }
        Redraw::Needed
    }

    /// Toggles the cell under the pixel position (x, y) of the canvas.
    pub fn toggle_at(&mut self, x: f32, y: f32) -> Redraw {
        if !x.is_finite() || !y.is_finite() || !usable_cell_size(self.config.cell_size) {
            return Redraw::NotNeeded;
        }
        let col = (x / self.config.cell_size).floor() as i64;
        let row = (y / self.config.cell_size).floor() as i64;

        let toggled = self.grid.toggle(row, col);
        if toggled {
            debug!(row, col, alive = self.grid.is_alive(row as usize, col as usize), "cell toggled");
        }
        Redraw::when(toggled)
    }

    /// Rebuilds the grid for a canvas of `width` x `height` pixels, keeping the overlap.
    pub fn resize_viewport(&mut self, width: f32, height: f32) -> Redraw {
        let rows = cells_along(height, self.config.cell_size);
        let cols = cells_along(width, self.config.cell_size);
        if rows == self.rows() && cols == self.cols() {
            return Redraw::NotNeeded;
        }

        info!(from_rows = self.rows(), from_cols = self.cols(), rows, cols, "grid resized");
        self.grid = self.grid.resized(rows, cols);
        Redraw::Needed
    }

    /// Clears the grid and stamps the pattern at `index` of [`PATTERNS`] in the middle.
    pub fn apply_pattern(&mut self, index: usize) -> Redraw {
        let Some(pattern) = PATTERNS.get(index) else {
            return Redraw::NotNeeded;
        };
        let mut grid = Grid::empty(self.rows(), self.cols());
        patterns::stamp(&mut grid, pattern);
        self.grid = grid;
        self.generation = 0;
        info!(pattern = pattern.name, "pattern applied");
        Redraw::Needed
    }

    fn advance(&mut self) -> bool {
        if self.rows() == 0 || self.cols() == 0 {
            return false;
        }
        self.grid = self.grid.next_generation();
        self.generation += 1;
        trace!(generation = self.generation, "generation advanced");
        true
    }
}

/// A cell size usable as a divisor: finite and positive.
fn usable_cell_size(cell_size: f32) -> bool {
    cell_size.is_finite() && cell_size > 0.0
}

/// Whole cells that fit in `pixels`; degenerate sizes give 0.
fn cells_along(pixels: f32, cell_size: f32) -> usize {
    if usable_cell_size(cell_size) && pixels.is_finite() && pixels > 0.0 {
        (pixels / cell_size).floor() as usize
    } else {
        0
    }
}
