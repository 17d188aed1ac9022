use crate::coin::{BiasedCoin, FairCoin};
use crate::die::{FairDie, LoadedDie};
use crate::source::UniformSource;

/// Any of the supported samplers.
///
/// [`Sampler::generate`] reports coins as `1` for heads and `0` for tails,
/// and die faces as zero-based indices.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampler {
    FairCoin(FairCoin),
    BiasedCoin(BiasedCoin),
    FairDie(FairDie),
    LoadedDie(LoadedDie),
}

impl Sampler {
    pub fn generate<S>(&self, source: &mut S) -> usize
    where
        S: UniformSource + ?Sized,
    {
        match self {
            Sampler::FairCoin(c) => c.generate(source).into(),
            Sampler::BiasedCoin(c) => c.generate(source).into(),
            Sampler::FairDie(d) => d.generate(source),
            Sampler::LoadedDie(d) => d.generate(source),
        }
    }

    /// Number of distinct outcomes `generate` can return.
    #[must_use]
    pub fn outcomes(&self) -> usize {
        match self {
            Sampler::FairCoin(_) | Sampler::BiasedCoin(_) => 2,
            Sampler::FairDie(d) => d.sides(),
            Sampler::LoadedDie(d) => d.sides(),
        }
    }

    /// Freezes the alias table of a loaded die; other samplers have nothing
    /// to precompute.
    pub fn precompute(&self) {
        if let Sampler::LoadedDie(d) = self {
            d.precompute();
        }
    }
}

impl From<FairCoin> for Sampler {
    fn from(value: FairCoin) -> Self {
        Sampler::FairCoin(value)
    }
}

impl From<BiasedCoin> for Sampler {
    fn from(value: BiasedCoin) -> Self {
        Sampler::BiasedCoin(value)
    }
}

impl From<FairDie> for Sampler {
    fn from(value: FairDie) -> Self {
        Sampler::FairDie(value)
    }
}

impl From<LoadedDie> for Sampler {
    fn from(value: LoadedDie) -> Self {
        Sampler::LoadedDie(value)
    }
}
