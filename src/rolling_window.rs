use std::collections::VecDeque;

/// Fixed-capacity FIFO buffer of the most recent observations.
///
/// Once the buffer reaches capacity, pushing a new value evicts the
/// oldest, so the contents are always the last `len()` observations
/// in arrival order.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    values: VecDeque<f64>,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation over the current contents.
    pub fn std_dev(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq_diff: f64 = self.values.iter().map(|&x| (x - mean).powi(2)).sum();
        (sum_sq_diff / self.values.len() as f64).sqrt()
    }

    /// Z-score of `value` against the current window.
    ///
    /// A zero-variance window yields exactly `0.0` rather than dividing
    /// by zero. That suppresses detection on constant-valued windows,
    /// which is the intended policy, not a claim of "no deviation".
    pub fn z_score(&self, value: f64) -> f64 {
        let std = self.std_dev();
        if std != 0.0 {
            (value - self.mean()) / std
        } else {
            0.0
        }
    }
}

//
//
//
//
//
//
// tests
//
//
