//! Independent pair iterators driven from worker threads.

use gbasis_iter::{ncart, PairIter, PairStep};
use rayon::prelude::*;

fn sweep(l0: usize, l1: usize, width: usize) -> anyhow::Result<Vec<PairStep>> {
    let mut it = PairIter::new(l0, l1, width)?;
    Ok(it.steps().collect())
}

#[test]
fn one_iterator_per_worker() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let pairs: Vec<(usize, usize)> = (0..5).flat_map(|a| (0..5).map(move |b| (a, b))).collect();
    let width = ncart(4);

    let parallel: Vec<Vec<PairStep>> = pairs
        .par_iter()
        .map(|&(l0, l1)| sweep(l0, l1, width))
        .collect::<anyhow::Result<_>>()?;

    for (&(l0, l1), steps) in pairs.iter().zip(&parallel) {
        assert_eq!(steps.len(), ncart(l0) * ncart(l1));
        assert_eq!(*steps, sweep(l0, l1, width)?, "({l0},{l1})");
    }
    Ok(())
}

/// Packed row-major fill of one shell-pair block using `offset`.
#[test]
fn offset_addresses_packed_block() -> anyhow::Result<()> {
    let (l0, l1) = (2, 3);
    let mut it = PairIter::new(l0, l1, ncart(l1))?;
    let mut block = vec![usize::MAX; it.len()];
    loop {
        block[it.offset()] = it.ibasis0() * 100 + it.ibasis1();
        if !it.advance() {
            break;
        }
    }
    for i in 0..ncart(l0) {
        for j in 0..ncart(l1) {
            assert_eq!(block[i * ncart(l1) + j], i * 100 + j);
        }
    }
    Ok(())
}
