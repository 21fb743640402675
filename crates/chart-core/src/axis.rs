// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and optional explicit (category) ticks.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit (position, label) ticks. When empty, numeric ticks are generated from the range.
    pub ticks: Vec<(f64, String)>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new() }
    }

    /// One slot per category at x = 0, 1, 2, ... with half a slot of padding on each side.
    pub fn categorical<S: AsRef<str>>(label: impl Into<String>, categories: &[S]) -> Self {
        let n = categories.len().max(1) as f64;
        let ticks = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f64, c.as_ref().to_string()))
            .collect();
        Self { label: label.into(), min: -0.5, max: n - 0.5, ticks }
    }

    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn is_categorical(&self) -> bool {
        !self.ticks.is_empty()
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }
}
