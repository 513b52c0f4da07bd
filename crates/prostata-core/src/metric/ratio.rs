/// Derived metric over two counters, resolved by name on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ratio {
    pub numerator: String,
    pub denominator: String,
    pub label: String,
}

impl Ratio {
    pub fn new(numerator: String, denominator: String, label: String) -> Self {
        Self { numerator, denominator, label }
    }

    /// Division convention: a zero denominator yields `0.0`.
    pub fn compute(numerator: i64, denominator: i64) -> f64 {
        if denominator == 0 {
            return 0.0;
        }
        numerator as f64 / denominator as f64
    }
}
