//! Data structures shared by the power enumerators.
//!
//! A shell of degree L holds one Cartesian Gaussian per exponent triple
//! (nx, ny, nz) with nx + ny + nz = L:
//!   ncart(L)  = (L+1)(L+2)/2   Cartesian functions
//!   2L + 1                     pure (spherical) functions
//!
//! Shell types follow the signed convention of the basis-set layer:
//! t ≥ 0 is a Cartesian shell of degree t, t ≤ -2 a pure shell of degree |t|.

use crate::error::{IterPowError, Result};

// ─── Limits ──────────────────────────────────────────────────────────────────
/// Highest shell degree accepted by the iterators.
pub const MAX_SHELL_TYPE: usize = 15;

// ─── Exponent triple ─────────────────────────────────────────────────────────

/// Cartesian powers (nx, ny, nz) of one basis function within a shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Powers {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl Powers {
    #[inline]
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Powers { nx, ny, nz }
    }

    /// First triple of the canonical order: (l, 0, 0).
    #[inline]
    pub const fn first(l: usize) -> Self { Powers::new(l, 0, 0) }

    /// Last triple of the canonical order: (0, 0, l).
    #[inline]
    pub const fn last(l: usize) -> Self { Powers::new(0, 0, l) }

    #[inline] pub const fn degree(&self) -> usize { self.nx + self.ny + self.nz }
    #[inline] pub const fn as_array(&self) -> [usize; 3] { [self.nx, self.ny, self.nz] }
}

impl From<[usize; 3]> for Powers {
    fn from(n: [usize; 3]) -> Self { Powers::new(n[0], n[1], n[2]) }
}

impl From<Powers> for [usize; 3] {
    fn from(p: Powers) -> Self { p.as_array() }
}

impl std::fmt::Display for Powers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.nx, self.ny, self.nz)
    }
}

// ─── Basis counts ────────────────────────────────────────────────────────────

/// Number of Cartesian GTOs for angular momentum l: (l+1)(l+2)/2
#[inline]
pub const fn ncart(l: usize) -> usize { (l + 1) * (l + 2) / 2 }

/// Number of pure (spherical) functions for angular momentum l: 2l+1
#[inline]
pub const fn npure(l: usize) -> usize { 2 * l + 1 }

/// Largest basis count over all shells with degree ≤ `max_shell_type`.
///
/// Cartesian shells are never smaller than pure ones, so this is simply
/// `ncart(max_shell_type)`.
#[inline]
pub const fn max_nbasis(max_shell_type: usize) -> usize { ncart(max_shell_type) }

/// Decoded signed shell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShellType {
    Cartesian(usize),
    Pure(usize),
}

impl ShellType {
    /// Decode the signed convention. `-1` is rejected: pure p shells are
    /// identical to Cartesian ones and never appear with a negative type.
    pub fn from_signed(t: i64) -> Result<Self> {
        let l = t.unsigned_abs() as usize;
        if l > MAX_SHELL_TYPE {
            return Err(IterPowError::ShellTypeTooLarge { shell_type: l, max: MAX_SHELL_TYPE });
        }
        match t {
            -1 => Err(IterPowError::InvalidShellType(t)),
            t if t < 0 => Ok(ShellType::Pure(l)),
            _ => Ok(ShellType::Cartesian(l)),
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        match *self {
            ShellType::Cartesian(l) | ShellType::Pure(l) => l,
        }
    }

    #[inline]
    pub fn is_pure(&self) -> bool { matches!(self, ShellType::Pure(_)) }

    /// Number of basis functions in a shell of this type.
    #[inline]
    pub fn nbasis(&self) -> usize {
        match *self {
            ShellType::Cartesian(l) => ncart(l),
            ShellType::Pure(l)      => npure(l),
        }
    }

    /// Back to the signed convention.
    #[inline]
    pub fn to_signed(&self) -> i64 {
        match *self {
            ShellType::Cartesian(l) => l as i64,
            ShellType::Pure(l)      => -(l as i64),
        }
    }
}

// Static canonical power tables for l = 0..=MAX_TABLE_L, generated by build.rs.
// Provides `MAX_TABLE_L` and `pow_table(l) -> Option<&'static [[usize; 3]]>`.
include!(concat!(env!("OUT_DIR"), "/pow_tables.rs"));

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
