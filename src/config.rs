use crate::sort::{AlgorithmKind, Direction};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("list size must be at least 1")]
    EmptyList,
    #[error("minimum value {min} is greater than maximum value {max}")]
    InvertedRange { min: i64, max: i64 },
    #[error("tick rate must be at least 1 per second")]
    ZeroTickRate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub size: usize,
    pub min_val: i64,
    pub max_val: i64,
    pub direction: Direction,
    pub algorithm: AlgorithmKind,
    pub fps: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 50,
            min_val: 0,
            max_val: 100,
            direction: Direction::Ascending,
            algorithm: AlgorithmKind::Bubble,
            fps: 60,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyList);
        }
        if self.min_val > self.max_val {
            return Err(ConfigError::InvertedRange {
                min: self.min_val,
                max: self.max_val,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}
