//! Writes `noisy.csv` and `clean.csv` into the given directory
//! (the current directory by default).
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use miniid3::generator::{DEFAULT_N_SAMPLE, DEFAULT_SEED};
use miniid3::WeatherGenerator;

use std::path::PathBuf;


fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let generator = WeatherGenerator::new(DEFAULT_SEED)
        .n_sample(DEFAULT_N_SAMPLE);

    let noisy = out_dir.join("noisy.csv");
    generator.noisy()?
        .to_csv(&noisy)
        .with_context(|| format!("failed to write {}", noisy.display()))?;
    tracing::info!(file = %noisy.display(), "wrote noisy sample");

    let clean = out_dir.join("clean.csv");
    generator.clean()?
        .to_csv(&clean)
        .with_context(|| format!("failed to write {}", clean.display()))?;
    tracing::info!(file = %clean.display(), "wrote clean sample");

    Ok(())
}
