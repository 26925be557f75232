// lib.rs - Conway's Game of Life on a torus: grid rule, pacing and controls
//
// Nothing in here draws. The host calls `Simulation::tick` once per frame and
// repaints whenever an operation reports `Redraw::Needed`.

pub mod config;
pub mod controller;
pub mod grid;
pub mod pacer;
pub mod palette;
pub mod patterns;

pub use config::{ConfigError, LifeConfig};
pub use controller::{Redraw, Simulation};
pub use grid::{BORN, Cell, DEAD, Grid};
pub use patterns::{PATTERNS, Pattern};
