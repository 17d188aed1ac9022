use once_cell::sync::OnceCell;

use crate::alias::AliasTable;
use crate::error::{Error, Result};
use crate::source::UniformSource;
use crate::validation::Validation;

/// A die with `sides` equally likely, zero-based faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FairDie {
    sides: usize,
}

/// A die whose faces follow an explicit probability vector.
///
/// Sampling rebuilds the alias table on every call unless
/// [`LoadedDie::precompute`] has frozen one inside the die. Both paths
/// yield identical outcomes for identical draws.
#[derive(Debug, Clone)]
pub struct LoadedDie {
    probabilities: Vec<f64>,
    table: OnceCell<AliasTable>,
}

impl FairDie {
    pub fn new(sides: usize) -> Result<Self> {
        if sides == 0 {
            return Err(Error::ZeroSides);
        }
        Ok(Self { sides })
    }

    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    pub fn generate<S>(&self, source: &mut S) -> usize
    where
        S: UniformSource + ?Sized,
    {
        face(source.next_f64(), self.sides)
    }
}

impl LoadedDie {
    pub fn new(sides: usize, probabilities: Vec<f64>) -> Result<Self> {
        Self::with_validation(sides, probabilities, &Validation::default())
    }

    pub fn with_validation(
        sides: usize,
        probabilities: Vec<f64>,
        validation: &Validation,
    ) -> Result<Self> {
        if sides == 0 {
            return Err(Error::ZeroSides);
        }
        if probabilities.len() != sides {
            return Err(Error::Sides {
                sides,
                len: probabilities.len(),
            });
        }
        validation.check_probabilities(&probabilities)?;

        Ok(Self {
            probabilities,
            table: OnceCell::new(),
        })
    }

    #[must_use]
    pub fn sides(&self) -> usize {
        self.probabilities.len()
    }

    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Builds a fresh alias table, ignoring any frozen one.
    #[must_use]
    pub fn alias_table(&self) -> AliasTable {
        AliasTable::new(&self.probabilities)
    }

    /// Builds the alias table once and keeps it for later draws.
    pub fn precompute(&self) -> &AliasTable {
        self.table.get_or_init(|| self.alias_table())
    }

    #[must_use]
    pub fn is_precomputed(&self) -> bool {
        self.table.get().is_some()
    }

    /// Consumes exactly two draws: one for the column, one for the coin.
    pub fn generate<S>(&self, source: &mut S) -> usize
    where
        S: UniformSource + ?Sized,
    {
        match self.table.get() {
            Some(table) => table.sample(source),
            None => self.alias_table().sample(source),
        }
    }
}

impl PartialEq for LoadedDie {
    fn eq(&self, other: &Self) -> bool {
        self.probabilities == other.probabilities
    }
}

// `x * sides` can round up to `sides` when `x` is just below 1.
#[inline]
pub(crate) fn face(x: f64, sides: usize) -> usize {
    ((x * sides as f64).floor() as usize).min(sides.saturating_sub(1))
}
