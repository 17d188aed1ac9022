//! Uniform `[0, 1)` sources consumed by the samplers.

use rand::{Rng, RngCore};

/// Yields one value uniformly distributed in `[0, 1)` per call.
///
/// Every [`rand::RngCore`] is a source. Values outside `[0, 1)` are not
/// checked; samplers fed such values produce unspecified (but memory-safe)
/// outcomes.
pub trait UniformSource {
    fn next_f64(&mut self) -> f64;
}

impl<G> UniformSource for G
where
    G: RngCore,
{
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Wraps a closure as a [`UniformSource`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut() -> f64,
{
    FromFn(f)
}

impl<F> UniformSource for FromFn<F>
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}

/// Deterministic source replaying a fixed list of values, wrapping around
/// after the last one. An empty list always yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    values: Vec<f64>,
    index: usize,
}

impl Cycle {
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            values: values.into_iter().collect(),
            index: 0,
        }
    }

    /// `0.0, 0.1, ..., 0.9`
    #[must_use]
    pub fn tenths() -> Self {
        Self::new((0..10).map(|i| f64::from(i) / 10.0))
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl UniformSource for Cycle {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        if self.index >= self.values.len() {
            self.index = 0;
        }
        let x = self.values[self.index];
        self.index += 1;
        x
    }
}
