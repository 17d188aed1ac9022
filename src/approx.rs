use bon::Builder;
use rand::rngs::ThreadRng;
use rand::thread_rng;
use tracing::debug;

use crate::sampler::Sampler;
use crate::source::UniformSource;
use crate::APPROX_SAMPLE_SIZE;

/// Draws a sampler repeatedly and tallies the outcomes.
#[derive(Debug, Builder)]
pub struct Approx<S = ThreadRng>
where
    S: UniformSource,
{
    #[builder(finish_fn)]
    source: S,
    #[builder(default = APPROX_SAMPLE_SIZE)]
    sample_size: u32,
}

/// Outcome counts indexed by outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Default for Approx<ThreadRng> {
    fn default() -> Self {
        Self::builder().build(thread_rng())
    }
}

impl<S> Approx<S>
where
    S: UniformSource,
{
    #[must_use]
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    #[must_use]
    pub fn eval(&mut self, sampler: &Sampler) -> Histogram {
        sampler.precompute();

        let mut counts = vec![0u64; sampler.outcomes()];
        for _ in 0..self.sample_size {
            let k = sampler.generate(&mut self.source);
            if let Some(c) = counts.get_mut(k) {
                *c += 1;
            }
        }

        debug!(sample_size = self.sample_size, "approximation finished");
        Histogram::new(counts)
    }
}

impl Histogram {
    #[must_use]
    pub fn new(counts: Vec<u64>) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn frequencies(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }

    /// Pearson's chi-squared statistic against `expected` probabilities.
    ///
    /// Outcomes with zero expected probability are skipped.
    #[must_use]
    pub fn chi_squared(&self, expected: &[f64]) -> Option<f64> {
        if expected.len() != self.counts.len() {
            return None;
        }
        let total = self.total as f64;
        let stat: f64 = self
            .counts
            .iter()
            .zip(expected)
            .filter(|&(_, &p)| p > 0.0)
            .map(|(&c, &p)| {
                let e = p * total;
                (c as f64 - e).powi(2) / e
            })
            .sum();
        Some(stat)
    }
}
