use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a die needs at least one side")]
    ZeroSides,
    #[error("{len} probabilities provided for a die with {sides} sides")]
    Sides { sides: usize, len: usize },
    #[error("invalid probability {value} for side {index}")]
    Probability { index: usize, value: f64 },
    #[error("probabilities sum to {sum}, expected 1")]
    ProbabilitySum { sum: f64 },
    #[error("heads probability {0} is outside [0, 1]")]
    HeadsProbability(f64),
}

pub type Result<T> = core::result::Result<T, Error>;
