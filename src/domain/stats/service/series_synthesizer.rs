use rand::Rng;

use crate::domain::stats::error::StatsError;
use crate::domain::stats::model::bucket_plan::BucketPlan;
use crate::domain::stats::model::series::{NamedSeries, SeriesPoint};

/// Peak-to-peak width of the per-point noise.
pub const JITTER_AMPLITUDE: f64 = 1.5;

/// Quadratic trend generator: `linear·i + quadratic·i² + offset`.
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    pub name: &'static str,
    pub linear: f64,
    pub quadratic: f64,
    pub offset: f64,
}

impl SeriesGenerator {
    pub fn trend(&self, i: usize) -> f64 {
        let x = i as f64;
        self.linear * x + self.quadratic * x * x + self.offset
    }
}

pub const DEFAULT_GENERATORS: [SeriesGenerator; 2] = [
    SeriesGenerator {
        name: "Group A",
        linear: 1.8,
        quadratic: 0.2,
        offset: 15.0,
    },
    SeriesGenerator {
        name: "Group B",
        linear: 1.21,
        quadratic: 0.15,
        offset: 8.2,
    },
];

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * JITTER_AMPLITUDE
}

/// One series per generator, each holding a point per bucket.
pub fn synthesize_series<R: Rng + ?Sized>(
    plan: &BucketPlan,
    generators: &[SeriesGenerator],
    rng: &mut R,
) -> Result<Vec<NamedSeries>, StatsError> {
    let timestamps = plan
        .bucket_timestamps()
        .ok_or_else(|| StatsError::InvalidTimespan("out of calendar range".into()))?;

    Ok(generators
        .iter()
        .map(|generator| NamedSeries {
            name: generator.name.to_string(),
            data: timestamps
                .iter()
                .enumerate()
                .map(|(i, &timestamp_millis)| SeriesPoint {
                    timestamp_millis,
                    value: generator.trend(i) + jitter(&mut *rng),
                })
                .collect(),
        })
        .collect())
}
