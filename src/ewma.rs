#[derive(Debug, Clone)]
pub struct Ewma {
    alpha: f64,
    value: Option<f64>,
}

impl Default for Ewma {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            value: None,
        }
    }
}

impl Ewma {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, value: None }
    }

    pub fn new_with_value(alpha: f64, value: f64) -> Self {
        Self {
            alpha,
            value: Some(value),
        }
    }

    /// The first observation seeds the average directly; every later
    /// observation blends in with weight `alpha`.
    pub fn observe(&mut self, x: f64) {
        let a = self.alpha;
        self.value = Some(match self.value {
            None => x,
            Some(prev) => a * x + (1.0 - a) * prev,
        });
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the current value of the EWMA, or `None` if nothing has
    /// been observed yet.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}
