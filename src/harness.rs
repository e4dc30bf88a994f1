use std::time::{Duration, Instant};

use crate::rotation::{auxiliary, Rotation};

/// Timing summary for one (rotation, distribution) cell of the report.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub rotation: Rotation,
    pub items: usize,
    pub best: Duration,
    pub average: Duration,
    pub repetitions: usize,
    pub samples: usize,
    pub left: usize,
    pub right: usize,
}

/// Times one rotation over one (left, right) distribution.
///
/// Every sample restores `work` from `source` and rotates it `repetitions`
/// times; best and average are taken across samples. The output of the
/// last pass is validated index-by-index against `expected` (the auxiliary
/// rotation of the same source); the first mismatch is logged and the run
/// continues with the next cell.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(skip(work, source, expected), level = "debug")]
pub fn measure(
    rotation: Rotation,
    work: &mut [u32],
    source: &[u32],
    expected: &[u32],
    left: usize,
    right: usize,
    samples: usize,
    repetitions: usize,
) -> Measurement {
    let mut best = Duration::ZERO;
    let mut total = Duration::ZERO;

    for _ in 0..samples {
        let start = Instant::now();

        for _ in 0..repetitions {
            work.copy_from_slice(source);
            rotation.apply(work, left, right);
        }

        let elapsed = start.elapsed();

        if best.is_zero() || elapsed < best {
            best = elapsed;
        }
        total += elapsed;
    }

    if let Some(index) = work.iter().zip(expected).position(|(got, want)| got != want) {
        tracing::error!(
            %rotation,
            index,
            got = work[index],
            want = expected[index],
            "validation failed"
        );
    }

    Measurement {
        rotation,
        items: source.len(),
        best,
        average: total / samples.max(1) as u32,
        repetitions,
        samples,
        left,
        right,
    }
}

/// Computes the reference output for a distribution with the auxiliary
/// rotation, reusing the caller's scratch vector.
pub fn reference(expected: &mut [u32], source: &[u32], left: usize, right: usize) {
    expected.copy_from_slice(source);
    auxiliary::rotate(expected, left, right);
}

/// The report table. Owns the one-time legend: the header is printed the
/// first time a row is recorded and never again for the session, and the
/// spacer between distribution groups stays quiet until then.
#[derive(Debug, Default)]
pub struct Session {
    legend: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank spacer row between distribution groups.
    pub fn separator(&mut self) {
        if self.legend {
            println!("|           |          |      |          |          |           |         |                  |");
        }
    }

    pub fn record(&mut self, m: &Measurement) {
        if !self.legend {
            self.legend = true;

            println!("|      Name |    Items | Type |     Best |  Average |     Loops | Samples |     Distribution |");
            println!("| --------- | -------- | ---- | -------- | -------- | --------- | ------- | ---------------- |");
        }

        println!(
            "|{:>10} | {:>8} | {:>4} | {:>8.6} | {:>8.6} | {:>9} | {:>7} | {:>16} |",
            m.rotation,
            m.items,
            u32::BITS,
            m.best.as_secs_f64(),
            m.average.as_secs_f64(),
            m.repetitions,
            m.samples,
            format!("{}/{}", m.left, m.right),
        );
    }
}

/// The (left, right) schedule driven against every selected rotation:
/// a fixed list of skewed splits, fine sweeps around 1, N/3 and N/2, and a
/// coarse 10%-step sweep. Groups are separated by a spacer row in the
/// report. Splits that do not fit `items` are dropped.
pub fn distributions(items: usize) -> Vec<Vec<(usize, usize)>> {
    let mut groups = Vec::new();

    let fixed = [1, 1000, 99_999, 199_998, 299_997, 399_996, 499_995];
    groups.push(
        fixed
            .into_iter()
            .filter(|&left| left < items)
            .map(|left| (left, items - left))
            .collect(),
    );

    groups.push(
        (1..=9)
            .filter(|&left| left < items)
            .map(|left| (left, items - left))
            .collect(),
    );

    groups.push(
        (items / 3..items / 3 + 5)
            .filter(|&left| left <= items)
            .map(|left| (left, items - left))
            .collect(),
    );

    groups.push(
        (items / 2..items / 2 + 9)
            .filter(|&left| left <= items)
            .map(|left| (left, items - left))
            .collect(),
    );

    let step = (items / 10).saturating_sub(1);
    if step > 0 {
        groups.push(
            (1..)
                .map(|i| i * step)
                .take_while(|&left| left < items)
                .map(|left| (left, items - left))
                .collect(),
        );
    }

    groups.retain(|group: &Vec<_>| !group.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_validates_and_reports() {
        let source: Vec<u32> = (0..100).collect();
        let mut work = source.clone();
        let mut expected = source.clone();

        reference(&mut expected, &source, 30, 70);

        let m = measure(Rotation::Piston, &mut work, &source, &expected, 30, 70, 3, 2);

        assert_eq!(work, expected);
        assert_eq!(m.items, 100);
        assert_eq!(m.samples, 3);
        assert_eq!(m.repetitions, 2);
        assert!(m.best <= m.average);
    }

    #[test]
    fn every_split_sums_to_items() {
        for items in [10, 1000, 1_000_000] {
            for group in distributions(items) {
                assert!(!group.is_empty());

                for (left, right) in group {
                    assert_eq!(left + right, items);
                }
            }
        }
    }

    #[test]
    fn full_size_schedule_has_the_classic_splits() {
        let all: Vec<(usize, usize)> = distributions(1_000_000).into_iter().flatten().collect();

        assert!(all.contains(&(1, 999_999)));
        assert!(all.contains(&(499_995, 500_005)));
        assert!(all.contains(&(500_000, 500_000)));
        assert!(all.contains(&(900_000 - 9, 100_009)));
    }

    #[test]
    fn tiny_item_counts_stay_in_range() {
        for items in 1..40 {
            for group in distributions(items) {
                for (left, _right) in group {
                    assert!(left <= items);
                }
            }
        }
    }
}
