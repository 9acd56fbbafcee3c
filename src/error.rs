use thiserror::Error;

/// Reasons a configuration is rejected before the ocean is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ocean must have at least one row and one column (got {rows}x{cols})")]
    EmptyOcean { rows: usize, cols: usize },

    #[error("ocean extent {extent} exceeds the maximum of {max} cells per axis")]
    OversizedOcean { extent: usize, max: usize },

    #[error("population mix adds up to {0}%, must not exceed 100%")]
    PopulationMix(u32),

    #[error("{name}: range minimum {min} is greater than maximum {max}")]
    InvertedRange { name: &'static str, min: u32, max: u32 },

    #[error("{0}: maturity divisor must be at least 1")]
    ZeroMaturityDivisor(&'static str),

    #[error("apex predator speed settings must be at least 1")]
    ZeroSpeed,

    #[error("storm chance {0} is outside [0, 1]")]
    StormChance(f64),
}
