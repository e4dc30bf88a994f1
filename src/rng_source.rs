use std::fmt;
use std::str::FromStr;

use rand::{thread_rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Source of the benchmark data. Seeded by default so that two runs
/// measure the same sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "kind")]
pub enum RngSource {
    Thread,
    Seeded { seed: u64 },
}

impl RngSource {
    pub fn to_rng(&self) -> Box<dyn RngCore> {
        match self {
            RngSource::Thread => Box::new(thread_rng()),
            RngSource::Seeded { seed } => {
                let rng: rand::rngs::StdRng = SeedableRng::seed_from_u64(*seed);
                Box::new(rng)
            }
        }
    }
}

impl Default for RngSource {
    fn default() -> Self {
        RngSource::Seeded { seed: 0 }
    }
}

impl fmt::Display for RngSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RngSource::Thread => write!(f, "thread"),
            RngSource::Seeded { seed } => write!(f, "seed:{}", seed),
        }
    }
}

impl FromStr for RngSource {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "thread" {
            Ok(RngSource::Thread)
        } else if s.starts_with("seed:") {
            let seed = s.trim_start_matches("seed:").parse()?;
            Ok(RngSource::Seeded { seed })
        } else {
            Err(eyre::eyre!("Invalid RngSource: {}", s))
        }
    }
}
