//! Power enumeration for one shell and for a pair of shells.

pub mod single;
pub mod pair;

pub use single::{advance_powers, basis_index, powers_at, ShellPowers};
pub use pair::{PairIter, PairStep};
