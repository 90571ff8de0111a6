//! Pipeline shapes over the reference domain.
//!
//! These chains mutate the shared records' fields in place and yield the same
//! handles they received. Because every [`RecordRepr`] aliases the same 100
//! records, the effect of a traversal is visible through all representations
//! and accumulates across traversals; these shapes exist to measure exactly
//! that aliasing behavior.

use crate::matrix::RecordRepr;
use crate::types::SharedRecord;

/// One mutating transform: bump each record's field by 1, yield the same handle.
pub fn mutating_map(repr: &RecordRepr) -> impl Iterator<Item = SharedRecord> + '_ {
    repr.iter().map(|record| {
        record.set_value(record.value() + 1);
        record
    })
}

/// Even-valued filter, then the mutating bump.
///
/// Only records whose field is currently even are bumped, so repeated
/// traversals walk each record in and out of the filtered set.
pub fn filter_then_mutating_map(repr: &RecordRepr) -> impl Iterator<Item = SharedRecord> + '_ {
    repr.iter()
        .filter(|record| record.value() % 2 == 0)
        .map(|record| {
            record.set_value(record.value() + 1);
            record
        })
}

/// Three chained mutating transforms; each full traversal adds 3 to every field.
pub fn multi_mutating_map(repr: &RecordRepr) -> impl Iterator<Item = SharedRecord> + '_ {
    repr.iter()
        .map(|record| {
            record.set_value(record.value() + 1);
            record
        })
        .map(|record| {
            record.set_value(record.value() + 1);
            record
        })
        .map(|record| {
            record.set_value(record.value() + 1);
            record
        })
}
