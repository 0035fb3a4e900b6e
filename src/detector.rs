use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, DetectorConfig};
use crate::ewma::Ewma;
use crate::rolling_window::RollingWindow;

/// Per-observation output: the value itself plus the anomalies flagged
/// at this step. In this design the list is either empty or contains
/// exactly the current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub value: f64,
    pub anomalies: Vec<f64>,
}

impl StepResult {
    pub fn is_anomalous(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

/// Streaming z-score anomaly detector.
///
/// Maintains a rolling window of the most recent values and a running
/// EWMA, and classifies each new observation against the window's mean
/// and population standard deviation. While the window is still filling
/// (warm-up) no detection is attempted; once it reaches capacity the
/// detector stays in detecting mode for the rest of its life.
///
/// The EWMA is updated every step but does not feed the anomaly
/// decision; it is readable through [`AnomalyDetector::smoothed`].
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    window: RollingWindow,
    ema: Ewma,
    threshold: f64,
    anomaly_log: Vec<f64>,
}

impl AnomalyDetector {
    pub fn new(config: DetectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            window: RollingWindow::new(config.window_size),
            ema: Ewma::new(config.alpha),
            threshold: config.threshold,
            anomaly_log: Vec::new(),
        })
    }

    /// Feed one observation through the detector and classify it.
    pub fn observe(&mut self, value: f64) -> StepResult {
        self.window.push(value);
        self.ema.observe(value);

        // warm-up: not enough history to judge anything yet
        if !self.window.is_full() {
            return StepResult {
                value,
                anomalies: vec![],
            };
        }

        let z_score = self.window.z_score(value);
        let anomalies = if z_score.abs() > self.threshold {
            self.anomaly_log.push(value);
            tracing::warn!(value, z_score, "anomaly detected");
            vec![value]
        } else {
            vec![]
        };
        StepResult { value, anomalies }
    }

    /// Whether the rolling window has reached capacity. Transitions from
    /// false to true exactly once and never reverts.
    pub fn is_warmed_up(&self) -> bool {
        self.window.is_full()
    }

    /// Current EWMA value, `None` before the first observation.
    pub fn smoothed(&self) -> Option<f64> {
        self.ema.value()
    }

    /// Every value flagged so far, in flag order. Remains queryable
    /// after the input stream is exhausted.
    pub fn anomaly_log(&self) -> &[f64] {
        &self.anomaly_log
    }

    /// Wrap an input stream in a lazy, one-to-one detection stream.
    pub fn detect<I>(
        config: DetectorConfig,
        stream: I,
    ) -> Result<DetectionStream<I::IntoIter>, ConfigError>
    where
        I: IntoIterator<Item = f64>,
    {
        Ok(DetectionStream {
            detector: Self::new(config)?,
            source: stream.into_iter(),
        })
    }
}

/// Lazy adapter over an upstream value source: each `next()` pulls
/// exactly one upstream value, runs one detection step, and yields one
/// [`StepResult`]. Finite iff the source is finite; to reprocess a
/// stream, build a fresh one.
#[derive(Debug)]
pub struct DetectionStream<I> {
    detector: AnomalyDetector,
    source: I,
}

impl<I> DetectionStream<I> {
    pub fn detector(&self) -> &AnomalyDetector {
        &self.detector
    }

    /// Recover the detector, e.g. to read the anomaly log after the
    /// source is exhausted.
    pub fn into_detector(self) -> AnomalyDetector {
        self.detector
    }
}

impl<I> Iterator for DetectionStream<I>
where
    I: Iterator<Item = f64>,
{
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        let value = self.source.next()?;
        Some(self.detector.observe(value))
    }
}
