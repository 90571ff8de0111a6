//! Pipeline shapes over the numeric domain.
//!
//! Each function lazily builds one fixed operator chain over a [`NumericRepr`]
//! and returns it unevaluated; the caller decides whether to drain it through
//! a [`crate::pipeline::Sink`] (the benchmark harness) or collect it (tests).
//! Elements flow through the whole chain one at a time; no stage materializes
//! an intermediate buffer.
//!
//! The five `filter_map_x*` chains differ only in depth, with each map stage
//! adding its own distinct constant. Each depth is a separate function so it
//! compiles to its own statically composed adapter chain; the marginal cost of
//! one more chained stage is the quantity under measurement.

use crate::matrix::NumericRepr;

/// One element-wise transform: `v + 1`.
pub fn single_map(repr: &NumericRepr) -> impl Iterator<Item = i64> + '_ {
    repr.iter().map(|v| v + 1)
}

/// Even filter, then one chained map.
pub fn filter_map_x1(repr: &NumericRepr) -> impl Iterator<Item = i64> + '_ {
    repr.iter().filter(|v| v % 2 == 0).map(|v| v + 1)
}

/// Even filter, then two chained maps.
pub fn filter_map_x2(repr: &NumericRepr) -> impl Iterator<Item = i64> + '_ {
    repr.iter()
        .filter(|v| v % 2 == 0)
        .map(|v| v + 1)
        .map(|v| v + 2)
}

/// Even filter, then three chained maps.
pub fn filter_map_x3(repr: &NumericRepr) -> impl Iterator<Item = i64> + '_ {
    repr.iter()
        .filter(|v| v % 2 == 0)
        .map(|v| v + 1)
        .map(|v| v + 2)
        .map(|v| v + 3)
}

/// Even filter, then four chained maps.
pub fn filter_map_x4(repr: &NumericRepr) -> impl Iterator<Item = i64> + '_ {
    repr.iter()
        .filter(|v| v % 2 == 0)
        .map(|v| v + 1)
        .map(|v| v + 2)
        .map(|v| v + 3)
        .map(|v| v + 4)
}

/// Even filter, then five chained maps.
pub fn filter_map_x5(repr: &NumericRepr) -> impl Iterator<Item = i64> + '_ {
    repr.iter()
        .filter(|v| v % 2 == 0)
        .map(|v| v + 1)
        .map(|v| v + 2)
        .map(|v| v + 3)
        .map(|v| v + 4)
        .map(|v| v + 5)
}
