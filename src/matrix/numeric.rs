//! Numeric-domain representations.
//!
//! Each variant of [`NumericRepr`] wraps the same logical content, the integers
//! `[0, SEQUENCE_LEN)`, behind a different structural capability profile. The
//! variants are the tagged-variant rendering of "one wrapper type per container
//! shape": what a caller may do with an entry is decided by the capability
//! surface it reports, not by downcasting.

use std::ops::Range;
use std::rc::Rc;
use std::slice;

use crate::error::{ReprError, ReprResult};
use crate::types::Capabilities;

/// One numeric logical sequence behind a specific capability profile.
///
/// Mutable-capable profiles ([`NumericRepr::Contiguous`], [`NumericRepr::Growable`])
/// own copies of the canonical content so an in-place write cannot corrupt the
/// shared canonical buffer; the read-only views share the canonical allocation.
#[derive(Debug, Clone)]
pub enum NumericRepr {
    /// Fixed-length buffer: random access, in-place writes, no growth.
    Contiguous(Box<[i64]>),
    /// Resizable ordered container: random access, writes, append.
    Growable(Vec<i64>),
    /// Read-only random access over the canonical buffer.
    RandomAccessView(Rc<[i64]>),
    /// Read-only count + containment, no random access.
    CollectionView(Rc<[i64]>),
    /// Forward-only iteration over the canonical buffer.
    SequentialView(Rc<[i64]>),
    /// Values computed on demand from a start/count pair; owns no storage.
    Progression { start: i64, count: usize },
    /// Result of a prior ascending sort of the canonical content.
    PreOrdered(Rc<[i64]>),
}

impl NumericRepr {
    /// Capability surface reported by this representation.
    ///
    /// A progression reports the same all-false surface as a sequential view:
    /// at this boundary the two are indistinguishable, and labeling resolves the
    /// ambiguity by identity (see [`crate::matrix::ReprMatrix::label_numeric`]).
    pub fn capabilities(&self) -> Capabilities {
        match self {
            NumericRepr::Contiguous(_) => Capabilities {
                random_access: true,
                writable: true,
                counted: true,
                ..Default::default()
            },
            NumericRepr::Growable(_) => Capabilities {
                random_access: true,
                writable: true,
                growable: true,
                counted: true,
                ..Default::default()
            },
            NumericRepr::RandomAccessView(_) => Capabilities {
                random_access: true,
                counted: true,
                ..Default::default()
            },
            NumericRepr::CollectionView(_) => Capabilities {
                counted: true,
                ..Default::default()
            },
            NumericRepr::SequentialView(_) | NumericRepr::Progression { .. } => {
                Capabilities::default()
            }
            NumericRepr::PreOrdered(_) => Capabilities {
                sorted: true,
                ..Default::default()
            },
        }
    }

    /// Stable element count, for profiles whose contract includes one.
    pub fn len(&self) -> Option<usize> {
        match self {
            NumericRepr::Contiguous(values) => Some(values.len()),
            NumericRepr::Growable(values) => Some(values.len()),
            NumericRepr::RandomAccessView(values) | NumericRepr::CollectionView(values) => {
                Some(values.len())
            }
            NumericRepr::SequentialView(_)
            | NumericRepr::Progression { .. }
            | NumericRepr::PreOrdered(_) => None,
        }
    }

    /// Indexed read, for random-access profiles.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range on a profile that supports the read.
    pub fn get(&self, index: usize) -> ReprResult<i64> {
        match self {
            NumericRepr::Contiguous(values) => Ok(values[index]),
            NumericRepr::Growable(values) => Ok(values[index]),
            NumericRepr::RandomAccessView(values) => Ok(values[index]),
            other => Err(ReprError::unsupported(other.name(), "indexed read")),
        }
    }

    /// Indexed write, for writable profiles.
    ///
    /// The read-only random-access view supports only the read half of its
    /// surface; rejecting the write is part of its contract.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range on a profile that supports the write.
    pub fn set(&mut self, index: usize, value: i64) -> ReprResult<()> {
        match self {
            NumericRepr::Contiguous(values) => {
                values[index] = value;
                Ok(())
            }
            NumericRepr::Growable(values) => {
                values[index] = value;
                Ok(())
            }
            other => Err(ReprError::unsupported(other.name(), "indexed write")),
        }
    }

    /// Append, for the growable profile only.
    pub fn push(&mut self, value: i64) -> ReprResult<()> {
        match self {
            NumericRepr::Growable(values) => {
                values.push(value);
                Ok(())
            }
            other => Err(ReprError::unsupported(other.name(), "append")),
        }
    }

    /// Containment query, for counted profiles.
    pub fn contains(&self, value: i64) -> ReprResult<bool> {
        match self {
            NumericRepr::Contiguous(values) => Ok(values.contains(&value)),
            NumericRepr::Growable(values) => Ok(values.contains(&value)),
            NumericRepr::RandomAccessView(values) | NumericRepr::CollectionView(values) => {
                Ok(values.contains(&value))
            }
            other => Err(ReprError::unsupported(other.name(), "containment query")),
        }
    }

    /// Position lookup, for random-access profiles.
    pub fn index_of(&self, value: i64) -> ReprResult<Option<usize>> {
        match self {
            NumericRepr::Contiguous(values) => Ok(values.iter().position(|v| *v == value)),
            NumericRepr::Growable(values) => Ok(values.iter().position(|v| *v == value)),
            NumericRepr::RandomAccessView(values) => {
                Ok(values.iter().position(|v| *v == value))
            }
            other => Err(ReprError::unsupported(other.name(), "position lookup")),
        }
    }

    /// Lazy pass over the logical sequence.
    ///
    /// Every profile yields the canonical content in canonical order; the
    /// progression computes each value on demand instead of reading storage.
    pub fn iter(&self) -> NumericValues<'_> {
        let inner = match self {
            NumericRepr::Contiguous(values) => ValuesInner::Slice(values.iter()),
            NumericRepr::Growable(values) => ValuesInner::Slice(values.iter()),
            NumericRepr::RandomAccessView(values) => ValuesInner::Slice(values.iter()),
            NumericRepr::CollectionView(values) => ValuesInner::Slice(values.iter()),
            // Forward-only contract: the iterator withholds the exact size hint.
            NumericRepr::SequentialView(values) => ValuesInner::Opaque(values.iter()),
            NumericRepr::Progression { start, count } => {
                ValuesInner::Progression(*start..*start + *count as i64)
            }
            NumericRepr::PreOrdered(values) => ValuesInner::Slice(values.iter()),
        };
        NumericValues { inner }
    }

    /// Diagnostic name of the concrete container, used in error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            NumericRepr::Contiguous(_) => "contiguous",
            NumericRepr::Growable(_) => "growable",
            NumericRepr::RandomAccessView(_) => "random-access-view",
            NumericRepr::CollectionView(_) => "collection-view",
            NumericRepr::SequentialView(_) => "sequential-view",
            NumericRepr::Progression { .. } => "progression",
            NumericRepr::PreOrdered(_) => "pre-ordered",
        }
    }
}

impl<'a> IntoIterator for &'a NumericRepr {
    type Item = i64;
    type IntoIter = NumericValues<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over one numeric representation.
pub struct NumericValues<'a> {
    inner: ValuesInner<'a>,
}

enum ValuesInner<'a> {
    Slice(slice::Iter<'a, i64>),
    /// Same backing walk as `Slice`, but reports no exact length.
    Opaque(slice::Iter<'a, i64>),
    Progression(Range<i64>),
}

impl Iterator for NumericValues<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match &mut self.inner {
            ValuesInner::Slice(iter) | ValuesInner::Opaque(iter) => iter.next().copied(),
            ValuesInner::Progression(range) => range.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ValuesInner::Slice(iter) => iter.size_hint(),
            ValuesInner::Opaque(_) => (0, None),
            ValuesInner::Progression(range) => range.size_hint(),
        }
    }
}
