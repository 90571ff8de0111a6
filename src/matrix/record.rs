//! Reference-domain representations.
//!
//! The reference domain re-exposes the same 100 [`SampleRecord`]s through four
//! capability profiles. Unlike the numeric domain, every profile here (including
//! the ones that own their container) holds aliases of the shared records, so
//! field mutation performed through one representation is observable through all
//! of them. Containment and lookup work by handle identity, not field value.

use std::rc::Rc;
use std::slice;

use crate::error::{ReprError, ReprResult};
use crate::types::{Capabilities, SampleRecord, SharedRecord};

/// One reference-typed logical sequence behind a specific capability profile.
#[derive(Debug, Clone)]
pub enum RecordRepr {
    /// Fixed-length buffer of shared handles.
    Contiguous(Box<[SharedRecord]>),
    /// Resizable ordered container of shared handles.
    Growable(Vec<SharedRecord>),
    /// Read-only random access over the canonical handles.
    RandomAccessView(Rc<[SharedRecord]>),
    /// Forward-only iteration over the canonical handles.
    SequentialView(Rc<[SharedRecord]>),
}

impl RecordRepr {
    /// Capability surface reported by this representation.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            RecordRepr::Contiguous(_) => Capabilities {
                random_access: true,
                writable: true,
                counted: true,
                ..Default::default()
            },
            RecordRepr::Growable(_) => Capabilities {
                random_access: true,
                writable: true,
                growable: true,
                counted: true,
                ..Default::default()
            },
            RecordRepr::RandomAccessView(_) => Capabilities {
                random_access: true,
                counted: true,
                ..Default::default()
            },
            RecordRepr::SequentialView(_) => Capabilities::default(),
        }
    }

    /// Stable element count, for profiles whose contract includes one.
    pub fn len(&self) -> Option<usize> {
        match self {
            RecordRepr::Contiguous(records) => Some(records.len()),
            RecordRepr::Growable(records) => Some(records.len()),
            RecordRepr::RandomAccessView(records) => Some(records.len()),
            RecordRepr::SequentialView(_) => None,
        }
    }

    /// Indexed read of a shared handle, for random-access profiles.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range on a profile that supports the read.
    pub fn get(&self, index: usize) -> ReprResult<SharedRecord> {
        match self {
            RecordRepr::Contiguous(records) => Ok(Rc::clone(&records[index])),
            RecordRepr::Growable(records) => Ok(Rc::clone(&records[index])),
            RecordRepr::RandomAccessView(records) => Ok(Rc::clone(&records[index])),
            other => Err(ReprError::unsupported(other.name(), "indexed read")),
        }
    }

    /// Replace the handle at `index`, for writable profiles.
    ///
    /// This swaps which record the slot aliases; it does not touch record fields.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range on a profile that supports the write.
    pub fn set(&mut self, index: usize, record: SharedRecord) -> ReprResult<()> {
        match self {
            RecordRepr::Contiguous(records) => {
                records[index] = record;
                Ok(())
            }
            RecordRepr::Growable(records) => {
                records[index] = record;
                Ok(())
            }
            other => Err(ReprError::unsupported(other.name(), "indexed write")),
        }
    }

    /// Append a handle, for the growable profile only.
    pub fn push(&mut self, record: SharedRecord) -> ReprResult<()> {
        match self {
            RecordRepr::Growable(records) => {
                records.push(record);
                Ok(())
            }
            other => Err(ReprError::unsupported(other.name(), "append")),
        }
    }

    /// Containment by handle identity, for counted profiles.
    pub fn contains(&self, record: &SampleRecord) -> ReprResult<bool> {
        match self {
            RecordRepr::Contiguous(records) => Ok(holds_alias(records, record)),
            RecordRepr::Growable(records) => Ok(holds_alias(records, record)),
            RecordRepr::RandomAccessView(records) => Ok(holds_alias(records, record)),
            other => Err(ReprError::unsupported(other.name(), "containment query")),
        }
    }

    /// Lazy pass over the logical sequence, yielding shared handles.
    pub fn iter(&self) -> RecordHandles<'_> {
        let inner = match self {
            RecordRepr::Contiguous(records) => HandlesInner::Slice(records.iter()),
            RecordRepr::Growable(records) => HandlesInner::Slice(records.iter()),
            RecordRepr::RandomAccessView(records) => HandlesInner::Slice(records.iter()),
            // Forward-only contract: the iterator withholds the exact size hint.
            RecordRepr::SequentialView(records) => HandlesInner::Opaque(records.iter()),
        };
        RecordHandles { inner }
    }

    /// Diagnostic name of the concrete container, used in error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            RecordRepr::Contiguous(_) => "contiguous",
            RecordRepr::Growable(_) => "growable",
            RecordRepr::RandomAccessView(_) => "random-access-view",
            RecordRepr::SequentialView(_) => "sequential-view",
        }
    }
}

fn holds_alias(records: &[SharedRecord], record: &SampleRecord) -> bool {
    records.iter().any(|held| std::ptr::eq(held.as_ref(), record))
}

impl<'a> IntoIterator for &'a RecordRepr {
    type Item = SharedRecord;
    type IntoIter = RecordHandles<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over one reference-typed representation.
///
/// Items are cloned `Rc` handles, so every yielded record still aliases the
/// canonical fixture.
pub struct RecordHandles<'a> {
    inner: HandlesInner<'a>,
}

enum HandlesInner<'a> {
    Slice(slice::Iter<'a, SharedRecord>),
    Opaque(slice::Iter<'a, SharedRecord>),
}

impl Iterator for RecordHandles<'_> {
    type Item = SharedRecord;

    fn next(&mut self) -> Option<SharedRecord> {
        match &mut self.inner {
            HandlesInner::Slice(iter) | HandlesInner::Opaque(iter) => {
                iter.next().map(Rc::clone)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            HandlesInner::Slice(iter) => iter.size_hint(),
            HandlesInner::Opaque(_) => (0, None),
        }
    }
}
