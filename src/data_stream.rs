use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Index period of the injected outliers (0, 100, 200, ...).
pub const OUTLIER_INTERVAL: usize = 100;
/// Offset added on top of the signal at each outlier index.
pub const OUTLIER_MAGNITUDE: f64 = 10.0;
/// Divisor of the sine argument; one full season is 2*pi*50 points.
pub const SEASONAL_PERIOD: f64 = 50.0;

#[derive(Debug, Error, PartialEq)]
pub enum StreamError {
    #[error("noise_level must be a non-negative finite number, got {0}")]
    NoiseLevel(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamParams {
    /// Number of points the stream yields before it ends.
    pub length: usize,
    /// Superimpose a sine-based seasonal pattern.
    pub seasonality: bool,
    /// Standard deviation of the Gaussian noise.
    pub noise_level: f64,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            length: 1000,
            seasonality: true,
            noise_level: 0.5,
        }
    }
}

/// Simulated upstream data source: a seasonal sine signal with Gaussian
/// noise and a large positive outlier injected at every
/// [`OUTLIER_INTERVAL`]th index.
///
/// Points are computed one at a time as they are pulled, and the stream
/// is deterministic for a given seed.
#[derive(Debug)]
pub struct SyntheticStream {
    params: StreamParams,
    noise: Normal<f64>,
    rng: StdRng,
    t: usize,
}

impl SyntheticStream {
    pub fn new(params: StreamParams, seed: u64) -> Result<Self, StreamError> {
        if !params.noise_level.is_finite() || params.noise_level < 0.0 {
            return Err(StreamError::NoiseLevel(params.noise_level));
        }
        let noise = Normal::new(0.0, params.noise_level)
            .map_err(|_| StreamError::NoiseLevel(params.noise_level))?;
        Ok(Self {
            params,
            noise,
            rng: StdRng::seed_from_u64(seed),
            t: 0,
        })
    }

    pub fn params(&self) -> &StreamParams {
        &self.params
    }
}

impl Iterator for SyntheticStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.t >= self.params.length {
            return None;
        }
        let t = self.t;
        self.t += 1;

        let seasonal = if self.params.seasonality {
            (t as f64 / SEASONAL_PERIOD).sin()
        } else {
            0.0
        };
        let mut value = seasonal + self.noise.sample(&mut self.rng);
        if t % OUTLIER_INTERVAL == 0 {
            value += OUTLIER_MAGNITUDE;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.params.length - self.t;
        (remaining, Some(remaining))
    }
}
