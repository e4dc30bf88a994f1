use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRotation;

pub mod auxiliary;
pub mod bridge;
pub mod contrev;
pub mod drill;
pub mod grail;
pub mod gries_mills;
pub mod helix;
pub mod juggling;
pub mod piston;
pub mod reversal;
pub mod stack;
pub mod trinity;

/// Capacity of the fixed stack buffer shared by the stack rotation, the
/// hybrid small paths and the residual finishes. A tuning constant: any
/// small bound produces the same output, only the timings change.
pub const STACK_DEPTH: usize = 8;

/// One of the interchangeable rotation algorithms.
///
/// Every variant satisfies the same contract: rotating `s` left by `left`
/// positions (equivalently right by `right`), with `left + right == s.len()`
/// as the caller's obligation. They differ only in how many element moves
/// and how much scratch space they spend getting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Auxiliary,
    Bridge,
    Contrev,
    Drill,
    Grail,
    #[serde(rename = "griesmills")]
    GriesMills,
    Helix,
    Juggling,
    Piston,
    Reversal,
    Stack,
    Trinity,
}

impl Rotation {
    pub const ALL: [Rotation; 12] = [
        Rotation::Auxiliary,
        Rotation::Bridge,
        Rotation::Contrev,
        Rotation::Drill,
        Rotation::Grail,
        Rotation::GriesMills,
        Rotation::Helix,
        Rotation::Juggling,
        Rotation::Piston,
        Rotation::Reversal,
        Rotation::Stack,
        Rotation::Trinity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rotation::Auxiliary => "auxiliary",
            Rotation::Bridge => "bridge",
            Rotation::Contrev => "contrev",
            Rotation::Drill => "drill",
            Rotation::Grail => "grail",
            Rotation::GriesMills => "griesmills",
            Rotation::Helix => "helix",
            Rotation::Juggling => "juggling",
            Rotation::Piston => "piston",
            Rotation::Reversal => "reversal",
            Rotation::Stack => "stack",
            Rotation::Trinity => "trinity",
        }
    }

    /// Single dispatch point used by the harness.
    pub fn apply<T: Copy>(self, s: &mut [T], left: usize, right: usize) {
        match self {
            Rotation::Auxiliary => auxiliary::rotate(s, left, right),
            Rotation::Bridge => bridge::rotate(s, left, right),
            Rotation::Contrev => contrev::rotate(s, left, right),
            Rotation::Drill => drill::rotate(s, left, right),
            Rotation::Grail => grail::rotate(s, left, right),
            Rotation::GriesMills => gries_mills::rotate(s, left, right),
            Rotation::Helix => helix::rotate(s, left, right),
            Rotation::Juggling => juggling::rotate(s, left, right),
            Rotation::Piston => piston::rotate(s, left, right),
            Rotation::Reversal => reversal::rotate(s, left, right),
            Rotation::Stack => stack::rotate(s, left, right),
            Rotation::Trinity => trinity::rotate(s, left, right),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rotation {
    type Err = UnknownRotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rotation::ALL
            .into_iter()
            .find(|rotation| rotation.name() == s)
            .ok_or_else(|| UnknownRotation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("auxiliary" => Rotation::Auxiliary)]
    #[test_case("bridge" => Rotation::Bridge)]
    #[test_case("contrev" => Rotation::Contrev)]
    #[test_case("griesmills" => Rotation::GriesMills)]
    #[test_case("juggling" => Rotation::Juggling)]
    #[test_case("trinity" => Rotation::Trinity)]
    fn parse_round_trip(s: &str) -> Rotation {
        let parsed: Rotation = s.parse().unwrap();

        assert_eq!(parsed.to_string(), s);

        parsed
    }

    #[test]
    fn unknown_name_lists_the_valid_ones() {
        let err = "quicksort".parse::<Rotation>().unwrap_err();
        let message = err.to_string();

        assert!(message.contains("quicksort"));
        assert!(message.contains("griesmills"));
        assert!(message.contains("trinity"));
    }

    #[test]
    fn serde_names_match_display() -> eyre::Result<()> {
        for rotation in Rotation::ALL {
            let json = serde_json::to_string(&rotation)?;

            assert_eq!(json, format!("\"{}\"", rotation));
        }

        Ok(())
    }
}

#[cfg(feature = "bench")]
pub mod benches {
    use core::hint::black_box;

    use criterion::Criterion;
    use rand::{thread_rng, Rng};

    use super::*;

    pub fn group(c: &mut Criterion) {
        let mut rng = thread_rng();
        let source: Vec<u32> = (0..1_000_000).map(|_| rng.gen()).collect();
        let mut work = source.clone();

        for rotation in Rotation::ALL {
            let mut g = c.benchmark_group(rotation.name());

            for left in [1_usize, 1000, 333_333, 500_000, 999_999] {
                let right = source.len() - left;

                g.bench_function(format!("{left}/{right}"), |bench| {
                    bench.iter(|| {
                        work.copy_from_slice(&source);
                        rotation.apply(black_box(work.as_mut_slice()), left, right);
                    })
                });
            }

            g.finish();
        }
    }
}
