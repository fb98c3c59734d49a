//! Single-shell power enumerator.
//!
//! Canonical order for degree L (same as the libcint Cartesian order):
//!   nx descends from L to 0; inside one nx block ny descends from L-nx
//!   to 0 while nz rises from 0 to L-nx.
//!
//! For L = 2:
//!   (2,0,0) (1,1,0) (1,0,1) (0,2,0) (0,1,1) (0,0,2)
//!
//! Integral tables downstream are indexed by the position in this order,
//! so the transition rule in `advance_powers` must not change.

use std::iter::FusedIterator;

use crate::error::{IterPowError, Result};
use crate::types::{ncart, pow_table, Powers, MAX_SHELL_TYPE};

/// Move `n` to the next triple of its shell in place.
///
/// Returns `false` when `n` was the last triple (0,0,L); `n` is then reset
/// to the first triple (L,0,0).
#[inline]
pub fn advance_powers(n: &mut Powers) -> bool {
    if n.ny > 0 {
        n.ny -= 1;
        n.nz += 1;
        true
    } else if n.nx > 0 {
        n.ny = n.nz + 1;
        n.nz = 0;
        n.nx -= 1;
        true
    } else {
        n.nx = n.nz;
        n.nz = 0;
        false
    }
}

/// Position of `n` in the canonical order of its shell.
///
/// The blocks before the one with this nx hold 1 + 2 + ... + (L-nx)
/// triples; inside the block the position is nz. Degrees above
/// `MAX_SHELL_TYPE` are outside the supported range.
#[inline]
pub fn basis_index(n: &Powers) -> usize {
    let m = n.degree() - n.nx;
    m * (m + 1) / 2 + n.nz
}

/// Triple at position `ibasis` of the canonical order for degree `l`.
///
/// `None` when `ibasis` is past the end of the shell or `l` exceeds
/// `MAX_SHELL_TYPE`.
pub fn powers_at(l: usize, ibasis: usize) -> Option<Powers> {
    if l > MAX_SHELL_TYPE || ibasis >= ncart(l) {
        return None;
    }
    if let Some(table) = pow_table(l) {
        return Some(Powers::from(table[ibasis]));
    }
    let mut n = Powers::first(l);
    for _ in 0..ibasis {
        advance_powers(&mut n);
    }
    Some(n)
}

/// One full cycle over the triples of a shell, first to last.
#[derive(Debug, Clone)]
pub struct ShellPowers {
    next: Powers,
    remaining: usize,
}

impl ShellPowers {
    pub fn new(l: usize) -> Result<Self> {
        if l > MAX_SHELL_TYPE {
            return Err(IterPowError::ShellTypeTooLarge { shell_type: l, max: MAX_SHELL_TYPE });
        }
        Ok(ShellPowers { next: Powers::first(l), remaining: ncart(l) })
    }
}

impl Iterator for ShellPowers {
    type Item = Powers;

    fn next(&mut self) -> Option<Powers> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.next;
        advance_powers(&mut self.next);
        self.remaining -= 1;
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ShellPowers {}
impl FusedIterator for ShellPowers {}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
