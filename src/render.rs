use crate::detector::{AnomalyDetector, DetectionStream, StepResult};

/// Lifecycle of a downstream rendering session.
///
/// The session is owned by the caller and driven explicitly: `start`
/// once, `update` once per detection result in stream order, `finish`
/// once when the stream ends. Nothing here is global state.
pub trait RenderSession {
    fn start(&mut self);
    fn update(&mut self, step: usize, result: &StepResult);
    fn finish(&mut self);
}

/// Collecting renderer: keeps the series and the flagged points in
/// memory and logs a summary when the session finishes. Stands in for a
/// real plotting backend, which would attach at the same trait.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    points: Vec<(usize, f64)>,
    anomalies: Vec<(usize, f64)>,
    active: bool,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    pub fn anomalies(&self) -> &[(usize, f64)] {
        &self.anomalies
    }

    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }

    /// True between `start` and `finish`.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl RenderSession for TraceRenderer {
    fn start(&mut self) {
        self.points.clear();
        self.anomalies.clear();
        self.active = true;
    }

    fn update(&mut self, step: usize, result: &StepResult) {
        self.points.push((step, result.value));
        for &anomaly in &result.anomalies {
            self.anomalies.push((step, anomaly));
        }
    }

    fn finish(&mut self) {
        self.active = false;
        tracing::info!(
            points = self.points.len(),
            anomalies = self.anomalies.len(),
            "render session finished"
        );
    }
}

/// Drive a detection stream to exhaustion through a rendering session.
///
/// Demand-driven end to end: each loop turn pulls exactly one result,
/// which pulls exactly one upstream value. Returns the detector so the
/// accumulated anomaly log stays reachable after the stream ends.
pub fn run_pipeline<I, S>(mut stream: DetectionStream<I>, session: &mut S) -> AnomalyDetector
where
    I: Iterator<Item = f64>,
    S: RenderSession,
{
    session.start();
    let mut step = 0;
    while let Some(result) = stream.next() {
        session.update(step, &result);
        step += 1;
    }
    session.finish();
    stream.into_detector()
}
