use serde::{Deserialize, Serialize};

use crate::rng_source::RngSource;
use crate::rotation::Rotation;

/// Settings for a benchmark run, layered from an optional TOML file,
/// `SPINDLE`-prefixed environment variables and command-line overrides.
/// Every knob has a default, so an empty configuration is a full run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of elements in the benchmarked sequence.
    #[serde(default = "default_items")]
    pub items: usize,

    /// Timed samples per (rotation, distribution) cell; best and average
    /// are taken over these.
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Rotations per sample.
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,

    /// Rotations to measure, in report order.
    #[serde(default = "default_rotations")]
    pub rotations: Vec<Rotation>,

    #[serde(default)]
    pub rng: RngSource,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            samples: default_samples(),
            repetitions: default_repetitions(),
            rotations: default_rotations(),
            rng: RngSource::default(),
        }
    }
}

fn default_items() -> usize {
    1_000_000
}

fn default_samples() -> usize {
    200
}

fn default_repetitions() -> usize {
    1
}

fn default_rotations() -> Vec<Rotation> {
    Rotation::ALL.to_vec()
}
