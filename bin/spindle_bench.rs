use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use spindle::config::BenchConfig;
use spindle::harness::{distributions, measure, reference, Session};
use spindle::rng_source::RngSource;
use spindle::rotation::Rotation;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[clap(version)]
pub struct Args {
    #[clap(short, long, env)]
    config: Option<PathBuf>,

    /// Number of elements in the benchmarked sequence
    #[clap(long)]
    items: Option<usize>,

    /// Timed samples per table cell
    #[clap(long)]
    samples: Option<usize>,

    /// Rotations per sample
    #[clap(long)]
    repetitions: Option<usize>,

    /// Data source, `thread` or `seed:<n>`
    #[clap(long)]
    rng: Option<RngSource>,

    /// Rotation to measure; repeat for several, omit for all
    #[clap(long = "rotation")]
    rotations: Vec<Rotation>,
}

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut settings = config::Config::builder();

    if let Some(path) = args.config {
        settings = settings.add_source(config::File::from(path).required(true));
    }

    let settings = settings
        .add_source(
            config::Environment::with_prefix("SPINDLE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config = settings.try_deserialize::<BenchConfig>()?;

    if let Some(items) = args.items {
        config.items = items;
    }
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(repetitions) = args.repetitions {
        config.repetitions = repetitions;
    }
    if let Some(rng) = args.rng {
        config.rng = rng;
    }
    if !args.rotations.is_empty() {
        config.rotations = args.rotations;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().compact())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(
        items = config.items,
        samples = config.samples,
        repetitions = config.repetitions,
        rng = %config.rng,
        "benchmark starting"
    );

    let mut rng = config.rng.to_rng();
    let source: Vec<u32> = (0..config.items).map(|_| rng.gen()).collect();
    let mut work = source.clone();
    let mut expected = source.clone();

    let schedule = distributions(config.items);

    let pb = ProgressBar::new(schedule.iter().map(Vec::len).sum::<usize>() as u64)
        .with_message("Measuring rotations...");

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{elapsed_precise}] [{wide_bar:.green}] {pos:>4}/{len:4} ({eta})")?,
    );

    let mut session = Session::new();

    for group in &schedule {
        session.separator();

        for &(left, right) in group {
            reference(&mut expected, &source, left, right);

            for &rotation in &config.rotations {
                let measurement = measure(
                    rotation,
                    &mut work,
                    &source,
                    &expected,
                    left,
                    right,
                    config.samples,
                    config.repetitions,
                );

                session.record(&measurement);
            }

            pb.inc(1);
        }
    }

    pb.finish_with_message("Done");

    Ok(())
}
