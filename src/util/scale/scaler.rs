/// Maps values of `[min, max]` linearly onto `[0, 1]`.
pub struct Scaler {
    pub min: f64,
    pub max: f64,
    diff: f64,
}

impl Scaler {
    pub fn new(min: f64, max: f64) -> Self {
        Scaler {
            min,
            max,
            diff: max - min,
        }
    }

    /// Scales `val` into `[0, 1]`. A degenerate range maps everything to the center.
    pub fn scale(&self, val: f64) -> f64 {
        if self.diff.abs() < 1e-12 {
            0.5
        } else {
            (val - self.min) / self.diff
        }
    }
}
