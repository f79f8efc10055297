//! Fits an ID3 tree on a weather CSV file (`clean.csv` by default)
//! and prints it.
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use miniid3::{
    Classifier,
    DecisionTreeBuilder,
    SampleReader,
    WEATHER_FEATURES,
    WEATHER_TARGET,
};


fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "clean.csv".to_string());

    let sample = SampleReader::default()
        .file(&file)
        .has_header(true)
        .target_feature(WEATHER_TARGET)
        .read()
        .with_context(|| format!("failed to read {file}"))?;

    let mut tree = DecisionTreeBuilder::new(&sample)
        .features(WEATHER_FEATURES)
        .build()?;
    let classifier = tree.fit(&sample)?;
    classifier.print();

    let accuracy = classifier.accuracy(&sample)?;
    tracing::info!(accuracy, "training accuracy");

    Ok(())
}
