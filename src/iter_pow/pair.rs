//! Paired-shell index iterator.
//!
//! Walks the Cartesian product of two shells with shell 1 as the fast
//! (inner) index and shell 0 as the slow (outer) index, keeping
//!   ibasis0, ibasis1  position of each triple in its shell
//!   offset            running position in the packed pair block
//!   skip              stride for the caller's storage cursor on each
//!                     outer step: max_nbasis - ncart(l1) + 1
//!
//! `skip` is handed out only. `offset` grows by one on every step (inner or
//! outer) and returns to zero when the whole product wraps, so inside one
//! cycle `offset == ibasis0 * ncart(l1) + ibasis1`.

use tracing::{debug, trace};

use crate::error::{IterPowError, Result};
use crate::types::{ncart, Powers, ShellType, MAX_SHELL_TYPE};
use super::single::advance_powers;

/// Copy of the iterator state after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairStep {
    pub n0:      Powers,
    pub n1:      Powers,
    pub ibasis0: usize,
    pub ibasis1: usize,
    pub offset:  usize,
}

/// Iterator over the basis-function pairs of two shells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairIter {
    shell_type0: usize,
    shell_type1: usize,
    skip:        usize,
    n0:          Powers,
    n1:          Powers,
    ibasis0:     usize,
    ibasis1:     usize,
    offset:      usize,
}

impl PairIter {
    /// Iterator positioned at ((l0,0,0), (l1,0,0)) with all counters zero.
    pub fn new(shell_type0: usize, shell_type1: usize, max_nbasis: usize) -> Result<Self> {
        let skip = Self::check(shell_type0, shell_type1, max_nbasis)?;
        let it = PairIter {
            shell_type0,
            shell_type1,
            skip,
            n0: Powers::first(shell_type0),
            n1: Powers::first(shell_type1),
            ibasis0: 0,
            ibasis1: 0,
            offset: 0,
        };
        debug!(shell_type0, shell_type1, max_nbasis, skip, "pair iterator created");
        Ok(it)
    }

    /// Build from signed shell types; pure shells enumerate the Cartesian
    /// powers of their degree.
    pub fn from_signed(shell_type0: i64, shell_type1: i64, max_nbasis: usize) -> Result<Self> {
        let t0 = ShellType::from_signed(shell_type0)?;
        let t1 = ShellType::from_signed(shell_type1)?;
        Self::new(t0.degree(), t1.degree(), max_nbasis)
    }

    /// Return to the initial state for a (possibly different) shell pair.
    ///
    /// On error the iterator is left untouched.
    pub fn reset(&mut self, shell_type0: usize, shell_type1: usize, max_nbasis: usize) -> Result<()> {
        let skip = Self::check(shell_type0, shell_type1, max_nbasis)?;
        self.shell_type0 = shell_type0;
        self.shell_type1 = shell_type1;
        self.skip = skip;
        self.n0 = Powers::first(shell_type0);
        self.n1 = Powers::first(shell_type1);
        self.ibasis0 = 0;
        self.ibasis1 = 0;
        self.offset = 0;
        debug!(shell_type0, shell_type1, max_nbasis, skip, "pair iterator reset");
        Ok(())
    }

    /// Validate the arguments and return `skip`.
    fn check(shell_type0: usize, shell_type1: usize, max_nbasis: usize) -> Result<usize> {
        for l in [shell_type0, shell_type1] {
            if l > MAX_SHELL_TYPE {
                return Err(IterPowError::ShellTypeTooLarge { shell_type: l, max: MAX_SHELL_TYPE });
            }
        }
        let nbasis1 = ncart(shell_type1);
        if max_nbasis < nbasis1 {
            return Err(IterPowError::BasisWidthTooSmall { max_nbasis, nbasis: nbasis1 });
        }
        Ok(max_nbasis - nbasis1 + 1)
    }

    /// Step to the next pair.
    ///
    /// Returns `false` when both shells wrapped: the full product has been
    /// visited and the iterator is back at its initial state.
    pub fn advance(&mut self) -> bool {
        let result = if advance_powers(&mut self.n1) {
            self.offset += 1;
            self.ibasis1 += 1;
            true
        } else {
            self.ibasis1 = 0;
            if advance_powers(&mut self.n0) {
                self.offset += 1;
                self.ibasis0 += 1;
                true
            } else {
                self.offset = 0;
                self.ibasis0 = 0;
                trace!(
                    shell_type0 = self.shell_type0,
                    shell_type1 = self.shell_type1,
                    "pair iterator wrapped"
                );
                false
            }
        };
        self.debug_check();
        result
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.n0.degree(), self.shell_type0);
        debug_assert_eq!(self.n1.degree(), self.shell_type1);
        debug_assert!(self.ibasis0 < self.nbasis0());
        debug_assert!(self.ibasis1 < self.nbasis1());
        debug_assert_eq!(self.offset, self.ibasis0 * self.nbasis1() + self.ibasis1);
    }

    #[inline] pub fn powers0(&self)     -> Powers { self.n0 }
    #[inline] pub fn powers1(&self)     -> Powers { self.n1 }
    #[inline] pub fn ibasis0(&self)     -> usize  { self.ibasis0 }
    #[inline] pub fn ibasis1(&self)     -> usize  { self.ibasis1 }
    #[inline] pub fn offset(&self)      -> usize  { self.offset }
    #[inline] pub fn skip(&self)        -> usize  { self.skip }
    #[inline] pub fn shell_type0(&self) -> usize  { self.shell_type0 }
    #[inline] pub fn shell_type1(&self) -> usize  { self.shell_type1 }
    #[inline] pub fn nbasis0(&self)     -> usize  { ncart(self.shell_type0) }
    #[inline] pub fn nbasis1(&self)     -> usize  { ncart(self.shell_type1) }

    /// Number of pairs in one full cycle: ncart(l0) * ncart(l1).
    #[inline]
    pub fn len(&self) -> usize { self.nbasis0() * self.nbasis1() }

    /// Always false; every shell holds at least one function.
    #[inline]
    pub fn is_empty(&self) -> bool { false }

    pub fn snapshot(&self) -> PairStep {
        PairStep {
            n0:      self.n0,
            n1:      self.n1,
            ibasis0: self.ibasis0,
            ibasis1: self.ibasis1,
            offset:  self.offset,
        }
    }

    /// One full cycle of snapshots, starting with the current state.
    ///
    /// The iterator ends where it started.
    pub fn steps(&mut self) -> impl Iterator<Item = PairStep> + '_ {
        let total = self.len();
        (0..total).map(move |_| {
            let s = self.snapshot();
            self.advance();
            s
        })
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter_pow::single::ShellPowers;

    #[test]
    fn p_p_full_cycle() {
        let mut it = PairIter::new(1, 1, 3).unwrap();
        assert_eq!(it.skip(), 1);
        for k in 1..9 {
            assert!(it.advance(), "step {k}");
        }
        assert_eq!(it.powers0(), Powers::last(1));
        assert_eq!(it.powers1(), Powers::last(1));
        assert_eq!((it.ibasis0(), it.ibasis1(), it.offset()), (2, 2, 8));
        assert!(!it.advance());
        assert_eq!((it.ibasis0(), it.ibasis1(), it.offset()), (0, 0, 0));
        assert_eq!(it.powers0(), Powers::first(1));
        assert_eq!(it.powers1(), Powers::first(1));
    }

    #[test]
    fn visits_product_in_row_order() {
        let (l0, l1) = (2, 1);
        let mut it = PairIter::new(l0, l1, 10).unwrap();
        let expected: Vec<(Powers, Powers)> = ShellPowers::new(l0)
            .unwrap()
            .flat_map(|a| ShellPowers::new(l1).unwrap().map(move |b| (a, b)))
            .collect();
        for (k, &(a, b)) in expected.iter().enumerate() {
            assert_eq!((it.powers0(), it.powers1()), (a, b), "pair {k}");
            assert_eq!(it.offset(), k);
            assert_eq!(it.ibasis0(), k / ncart(l1));
            assert_eq!(it.ibasis1(), k % ncart(l1));
            let more = it.advance();
            assert_eq!(more, k + 1 < expected.len());
        }
    }

    #[test]
    fn s_s_wraps_every_step() {
        let mut it = PairIter::new(0, 0, 1).unwrap();
        assert_eq!(it.skip(), 1);
        assert_eq!(it.len(), 1);
        for _ in 0..3 {
            assert!(!it.advance());
            assert_eq!(it.snapshot().offset, 0);
        }
    }

    #[test]
    fn inner_s_shell_drives_outer() {
        let mut it = PairIter::new(1, 0, 1).unwrap();
        assert!(it.advance());
        assert_eq!((it.ibasis0(), it.ibasis1(), it.offset()), (1, 0, 1));
        assert!(it.advance());
        assert_eq!((it.ibasis0(), it.ibasis1(), it.offset()), (2, 0, 2));
        assert!(!it.advance());
        assert_eq!((it.ibasis0(), it.ibasis1(), it.offset()), (0, 0, 0));
    }

    #[test]
    fn reset_is_idempotent() {
        let fresh = PairIter::new(2, 3, 15).unwrap();
        let mut it = fresh.clone();
        for _ in 0..17 {
            it.advance();
        }
        it.reset(2, 3, 15).unwrap();
        assert_eq!(it, fresh);
        it.reset(2, 3, 15).unwrap();
        assert_eq!(it, fresh);
    }

    #[test]
    fn reset_switches_shells() {
        let mut it = PairIter::new(1, 1, 3).unwrap();
        it.advance();
        it.reset(3, 2, 10).unwrap();
        assert_eq!(it.skip(), 10 - 6 + 1);
        assert_eq!(it.powers0(), Powers::first(3));
        assert_eq!(it.powers1(), Powers::first(2));
        assert_eq!(it.len(), 60);
    }

    #[test]
    fn rejects_narrow_width() {
        let err = PairIter::new(0, 2, 5).unwrap_err();
        assert_eq!(err, IterPowError::BasisWidthTooSmall { max_nbasis: 5, nbasis: 6 });

        let mut it = PairIter::new(1, 1, 3).unwrap();
        it.advance();
        let before = it.clone();
        assert!(it.reset(1, 3, 4).is_err());
        assert_eq!(it, before, "failed reset must not touch state");
    }

    #[test]
    fn rejects_large_shell() {
        let err = PairIter::new(MAX_SHELL_TYPE + 1, 0, 1).unwrap_err();
        assert!(matches!(err, IterPowError::ShellTypeTooLarge { .. }));
    }

    #[test]
    fn signed_shell_types() {
        let it = PairIter::from_signed(-2, 1, 6).unwrap();
        assert_eq!(it.shell_type0(), 2);
        assert_eq!(it.nbasis0(), 6);
        assert!(PairIter::from_signed(-1, 0, 1).is_err());
    }

    #[test]
    fn steps_cover_one_cycle() {
        let mut it = PairIter::new(2, 2, 6).unwrap();
        let start = it.clone();
        let steps: Vec<PairStep> = it.steps().collect();
        assert_eq!(steps.len(), 36);
        assert_eq!(steps[0], start.snapshot());
        assert_eq!(steps[35].offset, 35);
        assert_eq!(steps[35].n0, Powers::last(2));
        assert_eq!(it, start);
    }

    #[test]
    fn counters_stay_bounded() {
        let mut it = PairIter::new(3, 2, 10).unwrap();
        let mut wraps = 0;
        for _ in 0..(5 * it.len()) {
            if !it.advance() {
                wraps += 1;
            }
            assert!(it.ibasis0() < it.nbasis0());
            assert!(it.ibasis1() < it.nbasis1());
            assert!(it.offset() < it.len());
        }
        assert_eq!(wraps, 5);
    }
}
