//! Coins and dice driven by a caller-supplied uniform source.
//!
//! Loaded dice sample in constant time through an alias table built with
//! Vose's method. Die faces are zero-based.

mod alias;
mod approx;
mod coin;
mod die;
mod error;
mod sampler;
pub mod source;
mod validation;

pub use alias::AliasTable;
pub use approx::{Approx, Histogram};
pub use coin::{BiasedCoin, Coin, FairCoin};
pub use die::{FairDie, LoadedDie};
pub use error::{Error, Result};
pub use sampler::Sampler;
pub use source::UniformSource;
pub use validation::Validation;

const APPROX_SAMPLE_SIZE: u32 = 100_000;
const PROBABILITY_TOLERANCE: f64 = 1e-9;
