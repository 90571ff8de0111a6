//! The representation matrix.
//!
//! [`ReprMatrix::build`] constructs, once and eagerly, every structural
//! representation of two fixed logical sequences:
//!
//! - the numeric domain: the integers `[0, SEQUENCE_LEN)` behind seven
//!   capability profiles
//! - the reference domain: [`SampleRecord`]s with fields `0..SEQUENCE_LEN`
//!   behind four capability profiles, all aliasing the same records
//!
//! Each entry, fully iterated, yields exactly the canonical content in canonical
//! order; construction validates that law and fails rather than hand out a
//! representation that would make benchmark results incomparable.
//!
//! ```rust
//! use iter_chain_bench::matrix::ReprMatrix;
//!
//! # fn main() -> Result<(), iter_chain_bench::ReprError> {
//! let matrix = ReprMatrix::build()?;
//! for (repr, label) in matrix.numeric_representations() {
//!     let drained = repr.iter().count();
//!     println!("{label}: {drained} elements");
//! }
//! # Ok(())
//! # }
//! ```

pub mod label;
pub mod numeric;
pub mod record;

pub use label::{classify, ReprLabel};
pub use numeric::{NumericRepr, NumericValues};
pub use record::{RecordHandles, RecordRepr};

use std::rc::Rc;

use crate::error::{ReprError, ReprResult};
use crate::types::{SampleRecord, SharedRecord, SEQUENCE_LEN};

/// Position of the generated progression in the numeric enumeration order.
///
/// Labeling needs it: the progression's capability surface is identical to a
/// sequential view's, so only identity against this entry tells them apart.
const PROGRESSION_SLOT: usize = 5;

/// Owns the canonical storage for both domains and one representation per
/// capability profile.
///
/// Construction is one-time and eager; after it the canonical numeric buffer is
/// immutable, and the shared records change only through the mutating pipeline
/// shapes, in place.
pub struct ReprMatrix {
    numeric_canonical: Rc<[i64]>,
    record_canonical: Rc<[SharedRecord]>,
    numeric: Vec<NumericRepr>,
    records: Vec<RecordRepr>,
}

impl ReprMatrix {
    /// Build and validate the full matrix.
    ///
    /// Enumeration order is fixed here and stable across calls: numeric =
    /// contiguous, growable, random-access-view, collection-view,
    /// sequential-view, progression, pre-ordered; records = contiguous,
    /// growable, random-access-view, sequential-view.
    pub fn build() -> ReprResult<Self> {
        let numeric_canonical: Rc<[i64]> = (0..SEQUENCE_LEN as i64).collect();

        let mut sorted: Vec<i64> = numeric_canonical.to_vec();
        sorted.sort_unstable();

        let numeric = vec![
            NumericRepr::Contiguous(numeric_canonical.iter().copied().collect()),
            NumericRepr::Growable(numeric_canonical.to_vec()),
            NumericRepr::RandomAccessView(Rc::clone(&numeric_canonical)),
            NumericRepr::CollectionView(Rc::clone(&numeric_canonical)),
            NumericRepr::SequentialView(Rc::clone(&numeric_canonical)),
            NumericRepr::Progression {
                start: 0,
                count: SEQUENCE_LEN,
            },
            NumericRepr::PreOrdered(sorted.into()),
        ];
        debug_assert!(matches!(
            numeric[PROGRESSION_SLOT],
            NumericRepr::Progression { .. }
        ));

        let record_canonical: Rc<[SharedRecord]> = (0..SEQUENCE_LEN as i64)
            .map(|i| Rc::new(SampleRecord::new(i)))
            .collect();

        let records = vec![
            RecordRepr::Contiguous(record_canonical.iter().map(Rc::clone).collect()),
            RecordRepr::Growable(record_canonical.iter().map(Rc::clone).collect()),
            RecordRepr::RandomAccessView(Rc::clone(&record_canonical)),
            RecordRepr::SequentialView(Rc::clone(&record_canonical)),
        ];

        let matrix = Self {
            numeric_canonical,
            record_canonical,
            numeric,
            records,
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Numeric representations with their labels, in enumeration order.
    pub fn numeric_representations(&self) -> Vec<(&NumericRepr, &'static str)> {
        self.numeric
            .iter()
            .map(|repr| (repr, self.label_numeric(repr)))
            .collect()
    }

    /// Reference-typed representations with their labels, in enumeration order.
    pub fn record_representations(&self) -> Vec<(&RecordRepr, &'static str)> {
        self.records
            .iter()
            .map(|repr| (repr, self.label_record(repr)))
            .collect()
    }

    /// Label a numeric representation from its capability surface.
    ///
    /// The progression is the one profile the surface cannot identify (it
    /// reports the same capabilities as a sequential view), so it is recognized
    /// by identity against the matrix-owned entry first.
    pub fn label_numeric(&self, repr: &NumericRepr) -> &'static str {
        if std::ptr::eq(repr, &self.numeric[PROGRESSION_SLOT]) {
            return ReprLabel::Progression.as_str();
        }
        classify(repr.capabilities()).as_str()
    }

    /// Label a reference-typed representation from its capability surface.
    pub fn label_record(&self, repr: &RecordRepr) -> &'static str {
        classify(repr.capabilities()).as_str()
    }

    /// The canonical numeric buffer all numeric entries were built from.
    pub fn numeric_canonical(&self) -> &[i64] {
        &self.numeric_canonical
    }

    /// The canonical shared records all reference entries alias.
    pub fn record_canonical(&self) -> &[SharedRecord] {
        &self.record_canonical
    }

    /// Content-equality law: every entry, fully iterated, must reproduce the
    /// canonical content in order. Numeric entries compare by value; record
    /// entries compare by handle identity.
    fn validate(&self) -> ReprResult<()> {
        for repr in &self.numeric {
            let drained: Vec<i64> = repr.iter().collect();
            if drained.as_slice() != self.numeric_canonical() {
                return Err(ReprError::Construction {
                    message: format!(
                        "numeric '{}' does not round-trip the canonical buffer",
                        repr.name()
                    ),
                });
            }
        }

        for repr in &self.records {
            let aligned = repr.iter().count() == self.record_canonical.len()
                && repr
                    .iter()
                    .zip(self.record_canonical.iter())
                    .all(|(held, canonical)| Rc::ptr_eq(&held, canonical));
            if !aligned {
                return Err(ReprError::Construction {
                    message: format!(
                        "record '{}' does not alias the canonical records in order",
                        repr.name()
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ReprLabel, ReprMatrix};

    #[test]
    fn enumeration_order_is_fixed_and_labeled() {
        let matrix = ReprMatrix::build().expect("matrix construction");

        let numeric: Vec<&str> = matrix
            .numeric_representations()
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(
            numeric,
            vec![
                "contiguous",
                "growable",
                "random-access-view",
                "collection-view",
                "sequential-view",
                "progression",
                "pre-ordered",
            ]
        );

        let records: Vec<&str> = matrix
            .record_representations()
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(
            records,
            vec![
                "contiguous",
                "growable",
                "random-access-view",
                "sequential-view",
            ]
        );
    }

    #[test]
    fn progression_is_labeled_by_identity_not_surface() {
        let matrix = ReprMatrix::build().expect("matrix construction");
        let (progression, label) = matrix.numeric_representations()[5];

        assert_eq!(label, "progression");
        // Its surface alone would classify as the generic sequential view.
        assert_eq!(
            super::classify(progression.capabilities()),
            ReprLabel::SequentialView
        );
    }

    #[test]
    fn a_foreign_progression_falls_back_to_sequential_view() {
        let matrix = ReprMatrix::build().expect("matrix construction");
        let foreign = crate::matrix::NumericRepr::Progression { start: 0, count: 100 };

        // Identity check fails for an instance the matrix does not own.
        assert_eq!(matrix.label_numeric(&foreign), "sequential-view");
    }
}
