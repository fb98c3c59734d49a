//! gbasis-iter: canonical Cartesian power enumeration for Gaussian shells.
//!
//! Integral routines that fill per-shell-pair tables need to agree on the
//! order of the basis functions inside a shell. This crate provides that
//! order and a pair iterator that tracks where each (i, j) pair lands in a
//! packed block:
//!
//! * [`advance_powers`]: step one (nx, ny, nz) triple in place.
//! * [`PairIter`]: walk two shells (shell 1 inner, shell 0 outer) with
//!   `ibasis0`, `ibasis1`, `offset` and the caller-applied stride `skip`.
//!
//! # ABI
//! The same operations are exported for C callers:
//! ```c
//! int   gbasis_iter_pow1_inc(int64_t *n);
//! void *gbasis_iter_pow2_new(int64_t l0, int64_t l1, int64_t max_nbasis);
//! int   gbasis_iter_pow2_reset(void *it, int64_t l0, int64_t l1, int64_t max_nbasis);
//! int   gbasis_iter_pow2_inc(void *it);
//! int   gbasis_iter_pow2_state(const void *it, int64_t *out);
//! void  gbasis_iter_pow2_free(void *it);
//! ```

#![allow(clippy::missing_safety_doc)]

pub mod types;
pub mod error;
pub mod iter_pow;
pub mod config;

// Re-export commonly used types
pub use types::{ncart, Powers, ShellType, MAX_SHELL_TYPE};
pub use error::{IterPowError, Result};
pub use iter_pow::{advance_powers, basis_index, powers_at, PairIter, PairStep, ShellPowers};
pub use config::PairConfig;

use tracing::warn;

// ─────────────────────────────────────────────────────────────────
// C-ABI exports
// ─────────────────────────────────────────────────────────────────

/// Number of values written by `gbasis_iter_pow2_state`.
pub const POW2_STATE_LEN: usize = 10;

fn to_degree(v: i64, what: &'static str) -> Result<usize> {
    usize::try_from(v).map_err(|_| IterPowError::InvalidArgument(what))
}

/// Advance the powers in `n[0..3]` in place.
///
/// Returns 1 to continue, 0 when the shell wrapped back to (L,0,0), and -1
/// if `n` is null, holds a negative power or sums to a degree above
/// `MAX_SHELL_TYPE` (left untouched).
#[no_mangle]
pub unsafe extern "C" fn gbasis_iter_pow1_inc(n: *mut i64) -> i32 {
    if n.is_null() {
        warn!("gbasis_iter_pow1_inc: null powers");
        return -1;
    }
    let raw = std::slice::from_raw_parts_mut(n, 3);
    let degree = raw.iter().try_fold(0usize, |acc, &v| {
        usize::try_from(v).ok().and_then(|v| acc.checked_add(v))
    });
    if !matches!(degree, Some(l) if l <= MAX_SHELL_TYPE) {
        warn!(nx = raw[0], ny = raw[1], nz = raw[2], "gbasis_iter_pow1_inc: invalid powers");
        return -1;
    }
    let mut p = Powers::new(raw[0] as usize, raw[1] as usize, raw[2] as usize);
    let more = advance_powers(&mut p);
    // Every power is at most MAX_SHELL_TYPE here.
    raw[0] = p.nx as i64;
    raw[1] = p.ny as i64;
    raw[2] = p.nz as i64;
    i32::from(more)
}

fn pair_args(l0: i64, l1: i64, max_nbasis: i64) -> Result<(usize, usize, usize)> {
    Ok((
        to_degree(l0, "shell_type0")?,
        to_degree(l1, "shell_type1")?,
        to_degree(max_nbasis, "max_nbasis")?,
    ))
}

/// Allocate a pair iterator. Returns null on invalid arguments.
///
/// Free with `gbasis_iter_pow2_free`.
#[no_mangle]
pub unsafe extern "C" fn gbasis_iter_pow2_new(l0: i64, l1: i64, max_nbasis: i64) -> *mut PairIter {
    match pair_args(l0, l1, max_nbasis).and_then(|(a, b, w)| PairIter::new(a, b, w)) {
        Ok(it) => Box::into_raw(Box::new(it)),
        Err(e) => {
            warn!(error = %e, "gbasis_iter_pow2_new rejected arguments");
            std::ptr::null_mut()
        }
    }
}

/// Reset `it` for a new shell pair. Returns 0 on success, -1 on error
/// (the iterator is then unchanged).
#[no_mangle]
pub unsafe extern "C" fn gbasis_iter_pow2_reset(it: *mut PairIter, l0: i64, l1: i64, max_nbasis: i64) -> i32 {
    let Some(it) = it.as_mut() else {
        warn!("gbasis_iter_pow2_reset: null iterator");
        return -1;
    };
    match pair_args(l0, l1, max_nbasis).and_then(|(a, b, w)| it.reset(a, b, w)) {
        Ok(()) => 0,
        Err(e) => {
            warn!(error = %e, "gbasis_iter_pow2_reset rejected arguments");
            -1
        }
    }
}

/// Step the pair iterator: 1 to continue, 0 after a full cycle, -1 on null.
#[no_mangle]
pub unsafe extern "C" fn gbasis_iter_pow2_inc(it: *mut PairIter) -> i32 {
    match it.as_mut() {
        Some(it) => i32::from(it.advance()),
        None => -1,
    }
}

/// Write `[n0x, n0y, n0z, n1x, n1y, n1z, ibasis0, ibasis1, offset, skip]`
/// into `out` (`POW2_STATE_LEN` longs). Returns 0, or -1 on null pointers.
#[no_mangle]
pub unsafe extern "C" fn gbasis_iter_pow2_state(it: *const PairIter, out: *mut i64) -> i32 {
    let Some(it) = it.as_ref() else { return -1 };
    if out.is_null() {
        return -1;
    }
    let (n0, n1) = (it.powers0(), it.powers1());
    let vals = [
        n0.nx, n0.ny, n0.nz,
        n1.nx, n1.ny, n1.nz,
        it.ibasis0(), it.ibasis1(), it.offset(), it.skip(),
    ];
    let out = std::slice::from_raw_parts_mut(out, POW2_STATE_LEN);
    for (o, v) in out.iter_mut().zip(vals) {
        *o = v as i64;
    }
    0
}

/// Release an iterator from `gbasis_iter_pow2_new`. Null is ignored.
#[no_mangle]
pub unsafe extern "C" fn gbasis_iter_pow2_free(it: *mut PairIter) {
    if !it.is_null() {
        drop(Box::from_raw(it));
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
