// src/matching/weights.rs

/// Default comparison weights: company and title carry the decision,
/// JD text and salary assist, location is the weakest signal.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    company: 0.30,
    title: 0.30,
    salary: 0.15,
    location: 0.10,
    jd_excerpt: 0.15,
};

/// Per-field weights for the aggregate distance. Must sum to 1.0 so the
/// weighted sum stays in [0, 1] and the threshold keeps its meaning.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub company: f64,
    pub title: f64,
    pub salary: f64,
    pub location: f64,
    pub jd_excerpt: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.company + self.title + self.salary + self.location + self.jd_excerpt
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
