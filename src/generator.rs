//! Synthetic weather data in the style of Quinlan's ID3 paper.
//!
//! Two variants are produced from the same domains:
//! a *noisy* one whose class is drawn at random,
//! and a *clean* one whose class follows [`weather_rule`].
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::{Result, Sample};


/// Seed used by the data generation binary.
pub const DEFAULT_SEED: u64 = 42;
/// Number of rows used by the data generation binary.
pub const DEFAULT_N_SAMPLE: usize = 1000;

/// The categorical features of the weather data, in column order.
pub const WEATHER_FEATURES: [&str; 4] = [
    "Outlook", "Temperature", "Humidity", "Wind",
];
/// The target column of the weather data.
pub const WEATHER_TARGET: &str = "Class";

const HEADER: [&str; 5] = [
    "Outlook", "Temperature", "Humidity", "Wind", "Class",
];
const OUTLOOK: [&str; 3] = ["Sunny", "Overcast", "Rain"];
const TEMPERATURE: [&str; 3] = ["Hot", "Mild", "Cool"];
const HUMIDITY: [&str; 2] = ["High", "Normal"];
const WIND: [&str; 2] = ["Weak", "Strong"];
const CLASS: [&str; 2] = ["No", "Yes"];


/// The labeling rule of the clean variant.
/// Returns `"Yes"` if the outlook is overcast,
/// sunny with normal humidity, or rainy with weak wind.
pub fn weather_rule(outlook: &str, humidity: &str, wind: &str)
    -> &'static str
{
    let yes = outlook == "Overcast"
        || (outlook == "Sunny" && humidity == "Normal")
        || (outlook == "Rain" && wind == "Weak");
    if yes { "Yes" } else { "No" }
}


/// Generates weather samples from an explicit seed.
///
/// # Example
/// ```
/// use miniid3::WeatherGenerator;
///
/// let sample = WeatherGenerator::new(7)
///     .n_sample(50)
///     .clean()
///     .unwrap();
/// assert_eq!(sample.shape(), (50, 4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeatherGenerator {
    seed: u64,
    n_sample: usize,
}


impl Default for WeatherGenerator {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED, n_sample: DEFAULT_N_SAMPLE, }
    }
}


impl WeatherGenerator {
    /// Construct a generator with `DEFAULT_N_SAMPLE` rows.
    pub fn new(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }


    /// Set the number of rows.
    pub fn n_sample(mut self, n_sample: usize) -> Self {
        self.n_sample = n_sample;
        self
    }


    /// Every column, including the class, is drawn uniformly at random.
    pub fn noisy(&self) -> Result<Sample> {
        self.draw(true)
    }


    /// Features are drawn uniformly at random and
    /// the class follows [`weather_rule`].
    pub fn clean(&self) -> Result<Sample> {
        self.draw(false)
    }


    /// Every combination of feature values exactly once,
    /// labeled by [`weather_rule`]. This sample has 36 rows.
    pub fn exhaustive() -> Result<Sample> {
        let mut records = Vec::with_capacity(36);
        for outlook in OUTLOOK {
            for temperature in TEMPERATURE {
                for humidity in HUMIDITY {
                    for wind in WIND {
                        let class = weather_rule(outlook, humidity, wind);
                        records.push([outlook, temperature, humidity, wind, class]);
                    }
                }
            }
        }
        Sample::from_records(&HEADER[..], records.as_slice(), WEATHER_TARGET)
    }


    fn draw(&self, noisy: bool) -> Result<Sample> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut records = Vec::with_capacity(self.n_sample);
        for _ in 0..self.n_sample {
            let outlook = pick(&mut rng, &OUTLOOK);
            let temperature = pick(&mut rng, &TEMPERATURE);
            let humidity = pick(&mut rng, &HUMIDITY);
            let wind = pick(&mut rng, &WIND);
            let class = if noisy {
                pick(&mut rng, &CLASS)
            } else {
                weather_rule(outlook, humidity, wind)
            };
            records.push([outlook, temperature, humidity, wind, class]);
        }

        tracing::debug!(
            seed = self.seed, n_sample = self.n_sample, noisy,
            "generated weather sample"
        );
        Sample::from_records(&HEADER[..], records.as_slice(), WEATHER_TARGET)
    }
}


#[inline]
fn pick<R: Rng>(rng: &mut R, domain: &[&'static str]) -> &'static str {
    domain[rng.gen_range(0..domain.len())]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sample() {
        let a = WeatherGenerator::new(3).n_sample(100).noisy().unwrap();
        let b = WeatherGenerator::new(3).n_sample(100).noisy().unwrap();
        assert_eq!(a.target(), b.target());
        assert_eq!(a.features(), b.features());
    }

    #[test]
    fn clean_labels_follow_the_rule() {
        let sample = WeatherGenerator::new(11).n_sample(200).clean().unwrap();
        for row in 0..200 {
            let r = sample.row(row);
            let expected = weather_rule(
                r.get("Outlook").unwrap(),
                r.get("Humidity").unwrap(),
                r.get("Wind").unwrap(),
            );
            assert_eq!(r.label(), Some(expected));
        }
    }

    #[test]
    fn exhaustive_covers_every_combination() {
        let sample = WeatherGenerator::exhaustive().unwrap();
        assert_eq!(sample.shape(), (36, 4));
        let yes = sample.target().iter().filter(|y| *y == "Yes").count();
        assert_eq!(yes, 24);
    }
}
