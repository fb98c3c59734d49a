//! Shell-pair configuration.
//!
//! A `PairConfig` names the two shell types and the storage width in the
//! signed shell-type convention; with the `serde` feature it can be read
//! from any serde format.

use crate::error::Result;
use crate::iter_pow::PairIter;

/// Arguments for building a [`PairIter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PairConfig {
    pub shell_type0: i64,
    pub shell_type1: i64,
    /// Width of one row in the caller's storage.
    pub max_nbasis: usize,
}

impl Default for PairConfig {
    fn default() -> Self {
        PairConfig { shell_type0: 0, shell_type1: 0, max_nbasis: 1 }
    }
}

impl PairConfig {
    pub fn build(&self) -> Result<PairIter> {
        PairIter::from_signed(self.shell_type0, self.shell_type1, self.max_nbasis)
    }
}
