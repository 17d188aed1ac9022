use crate::error::Result;
use crate::source::UniformSource;
use crate::validation::Validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coin {
    Tails,
    Heads,
}

impl Coin {
    #[must_use]
    pub fn is_heads(self) -> bool {
        self == Coin::Heads
    }
}

impl From<Coin> for usize {
    fn from(value: Coin) -> Self {
        match value {
            Coin::Tails => 0,
            Coin::Heads => 1,
        }
    }
}

impl TryFrom<usize> for Coin {
    type Error = usize;

    fn try_from(value: usize) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Coin::Tails),
            1 => Ok(Coin::Heads),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FairCoin;

impl FairCoin {
    pub fn generate<S>(&self, source: &mut S) -> Coin
    where
        S: UniformSource + ?Sized,
    {
        flip(source.next_f64(), 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasedCoin {
    heads_probability: f64,
}

impl BiasedCoin {
    pub fn new(heads_probability: f64) -> Result<Self> {
        Self::with_validation(heads_probability, &Validation::default())
    }

    pub fn with_validation(heads_probability: f64, validation: &Validation) -> Result<Self> {
        validation.check_heads_probability(heads_probability)?;
        Ok(Self { heads_probability })
    }

    #[must_use]
    pub fn heads_probability(&self) -> f64 {
        self.heads_probability
    }

    pub fn generate<S>(&self, source: &mut S) -> Coin
    where
        S: UniformSource + ?Sized,
    {
        flip(source.next_f64(), self.heads_probability)
    }
}

// Strict comparison: a draw equal to the bias lands on tails.
#[inline]
pub(crate) fn flip(x: f64, heads_probability: f64) -> Coin {
    if x < heads_probability {
        Coin::Heads
    } else {
        Coin::Tails
    }
}
