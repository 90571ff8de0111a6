//! Capability-based classification of representations.
//!
//! Labels exist for reporting only: the benchmark harness uses them as display
//! keys when registering (pipeline shape × representation) pairs. Classification
//! works off the [`Capabilities`] surface a representation reports, never off
//! the concrete container behind it, with one exception handled by
//! [`crate::matrix::ReprMatrix`]: a generated progression reports the same
//! all-false surface as a plain sequential view, so the matrix labels it by
//! identity against its own entry before falling back to [`classify`].

use std::fmt;

use crate::types::Capabilities;

/// Stable label for one capability profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReprLabel {
    /// Fixed-length random-access buffer, writable in place.
    Contiguous,
    /// Random-access container that can also append.
    Growable,
    /// Read-only random access.
    RandomAccessView,
    /// Count and containment, no random access.
    CollectionView,
    /// Forward-only iteration, nothing else.
    SequentialView,
    /// Values generated on demand from a start/count pair.
    Progression,
    /// Output of a prior sort, ascending by provenance.
    PreOrdered,
}

impl ReprLabel {
    /// The reporting string for this label. Stable across calls and releases.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReprLabel::Contiguous => "contiguous",
            ReprLabel::Growable => "growable",
            ReprLabel::RandomAccessView => "random-access-view",
            ReprLabel::CollectionView => "collection-view",
            ReprLabel::SequentialView => "sequential-view",
            ReprLabel::Progression => "progression",
            ReprLabel::PreOrdered => "pre-ordered",
        }
    }
}

impl fmt::Display for ReprLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a capability surface to its label.
///
/// Sort provenance wins over everything else, then the random-access family is
/// split by mutability. A surface matching no known profile degrades to the most
/// generic capability, [`ReprLabel::SequentialView`].
pub fn classify(caps: Capabilities) -> ReprLabel {
    if caps.sorted {
        ReprLabel::PreOrdered
    } else if caps.random_access {
        if caps.growable {
            ReprLabel::Growable
        } else if caps.writable {
            ReprLabel::Contiguous
        } else {
            ReprLabel::RandomAccessView
        }
    } else if caps.counted {
        ReprLabel::CollectionView
    } else {
        ReprLabel::SequentialView
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, ReprLabel};
    use crate::types::Capabilities;

    #[test]
    fn classify_covers_every_declared_profile() {
        let contiguous = Capabilities {
            random_access: true,
            writable: true,
            counted: true,
            ..Default::default()
        };
        let growable = Capabilities {
            growable: true,
            ..contiguous
        };
        let random_access_view = Capabilities {
            random_access: true,
            counted: true,
            ..Default::default()
        };
        let collection_view = Capabilities {
            counted: true,
            ..Default::default()
        };
        let pre_ordered = Capabilities {
            sorted: true,
            ..Default::default()
        };

        assert_eq!(classify(contiguous), ReprLabel::Contiguous);
        assert_eq!(classify(growable), ReprLabel::Growable);
        assert_eq!(classify(random_access_view), ReprLabel::RandomAccessView);
        assert_eq!(classify(collection_view), ReprLabel::CollectionView);
        assert_eq!(classify(pre_ordered), ReprLabel::PreOrdered);
    }

    #[test]
    fn unknown_surface_degrades_to_sequential_view() {
        assert_eq!(
            classify(Capabilities::default()),
            ReprLabel::SequentialView
        );
    }

    #[test]
    fn labels_render_their_reporting_strings() {
        assert_eq!(ReprLabel::Progression.to_string(), "progression");
        assert_eq!(ReprLabel::PreOrdered.as_str(), "pre-ordered");
    }
}
