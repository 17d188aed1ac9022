//! Alias tables built with Vose's method.
//!
//! Construction is `O(n)` in the number of sides; sampling a built table
//! costs two uniform draws and `O(1)` work.

use tracing::{debug, trace};

use crate::coin::{flip, Coin};
use crate::die::face;
use crate::source::UniformSource;

#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    alias: Vec<usize>,
    prob: Vec<f64>,
}

impl AliasTable {
    /// Builds the table for `probabilities`, which are assumed to sum to 1.
    ///
    /// Both work lists are stacks: indices are pushed in ascending order
    /// and popped last-in-first-out, which fixes the exact alias and
    /// probability values produced for a given input.
    #[must_use]
    pub fn new(probabilities: &[f64]) -> Self {
        let n = probabilities.len();
        trace!(sides = n, "building alias table");

        let mut alias = vec![0; n];
        let mut prob = vec![0.0; n];
        let mut scaled: Vec<f64> = probabilities.iter().map(|p| p * n as f64).collect();

        let (mut small, mut large): (Vec<usize>, Vec<usize>) =
            (0..n).partition(|&i| scaled[i] < 1.0);

        while !small.is_empty() && !large.is_empty() {
            let (Some(l), Some(g)) = (pop(&mut small), pop(&mut large)) else {
                break;
            };
            prob[l] = scaled[l];
            alias[l] = g;
            scaled[g] = scaled[g] + scaled[l] - 1.0;
            if scaled[g] < 1.0 {
                small.push(g);
            } else {
                large.push(g);
            }
        }

        while let Some(g) = pop(&mut large) {
            prob[g] = 1.0;
        }

        // Only reachable through floating point rounding.
        if !small.is_empty() {
            debug!(remaining = small.len(), "draining small partition");
        }
        while let Some(l) = pop(&mut small) {
            prob[l] = 1.0;
        }

        Self { alias, prob }
    }

    #[must_use]
    pub fn alias(&self) -> &[usize] {
        &self.alias
    }

    #[must_use]
    pub fn prob(&self) -> &[f64] {
        &self.prob
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prob.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }

    /// Picks a column with the first draw, then keeps it or takes its alias
    /// with a coin biased by the column's probability.
    ///
    /// An empty table has no faces and always yields `0`.
    pub fn sample<S>(&self, source: &mut S) -> usize
    where
        S: UniformSource + ?Sized,
    {
        if self.is_empty() {
            return 0;
        }
        let i = face(source.next_f64(), self.len());
        match flip(source.next_f64(), self.prob[i]) {
            Coin::Heads => i,
            Coin::Tails => self.alias[i],
        }
    }
}

#[inline]
fn pop(stack: &mut Vec<usize>) -> Option<usize> {
    stack.pop()
}
