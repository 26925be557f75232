// config.rs - Tunables for the simulation and their environment overrides

use std::str::FromStr;

use thiserror::Error;

pub const ENV_CELL_SIZE: &str = "LIFE_CELL_SIZE";
pub const ENV_DENSITY: &str = "LIFE_DENSITY";
pub const ENV_SPEED: &str = "LIFE_SPEED";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive number of pixels, got {0}")]
    CellSize(f32),
    #[error("random density must lie in [0, 1], got {0}")]
    Density(f64),
    #[error("speed range {min}..={max} is empty or starts at zero")]
    SpeedRange { min: u32, max: u32 },
    #[error("initial speed {speed} is outside {min}..={max}")]
    InitialSpeed { speed: u32, min: u32, max: u32 },
    #[error("cannot parse {var}={value:?}")]
    Parse { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// Side of one cell in pixels.
    pub cell_size: f32,
    /// Corner radius used when painting a cell.
    pub cell_rounding: f32,
    /// Probability of a cell being alive after randomize.
    pub density: f64,
    /// Generations per second at startup.
    pub initial_speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: 12.0,
            cell_rounding: 2.0,
            density: 0.30,
            initial_speed: 10,
            min_speed: 1,
            max_speed: 60,
        }
    }
}

impl LifeConfig {
    /// Defaults with `LIFE_CELL_SIZE`, `LIFE_DENSITY` and `LIFE_SPEED` applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`LifeConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(cell_size) = parse_var(&lookup, ENV_CELL_SIZE)? {
            config.cell_size = cell_size;
        }
        if let Some(density) = parse_var(&lookup, ENV_DENSITY)? {
            config.density = density;
        }
        if let Some(speed) = parse_var(&lookup, ENV_SPEED)? {
            config.initial_speed = speed;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if self.min_speed == 0 || self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            return Err(ConfigError::InitialSpeed {
                speed: self.initial_speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }

    pub fn clamp_speed(&self, speed: u32) -> u32 {
        speed.clamp(self.min_speed, self.max_speed.max(self.min_speed))
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse { var, value: raw }),
    }
}
