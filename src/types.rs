//! Core data model types for the representation matrix.
//!
//! The matrix exposes one logical sequence per structural capability profile. The
//! types here describe the two ingredients every profile shares: the capability
//! surface a representation reports ([`Capabilities`]) and the mutable record
//! element used by the reference-typed domain ([`SampleRecord`]).

use std::cell::Cell;
use std::rc::Rc;

/// Length of every logical sequence built by the matrix.
pub const SEQUENCE_LEN: usize = 100;

/// The set of structural operations a representation supports.
///
/// Labeling works purely off this surface (see [`crate::matrix::label`]); the
/// flags are never consulted inside pipeline code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Indexed reads are supported.
    pub random_access: bool,
    /// In-place element writes are supported.
    pub writable: bool,
    /// Appending elements is supported.
    pub growable: bool,
    /// A stable element count (and containment queries) are supported.
    pub counted: bool,
    /// Content is guaranteed ascending by provenance of a prior sort.
    pub sorted: bool,
}

/// A mutable record element shared by every reference-typed representation.
///
/// All representations of the reference domain alias the same 100 records, so a
/// field mutation performed inside one pipeline is visible through every other
/// alias. That aliasing is what the mutating pipeline shapes measure.
#[derive(Debug, Default)]
pub struct SampleRecord {
    value: Cell<i64>,
}

impl SampleRecord {
    /// Create a record with the given field value.
    pub fn new(value: i64) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Current field value.
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    /// Overwrite the field value in place.
    pub fn set_value(&self, value: i64) {
        self.value.set(value);
    }
}

/// Shared handle to a [`SampleRecord`].
///
/// The crate is single-threaded; `Rc` keeps the mutable fixtures from ever
/// crossing a thread boundary.
pub type SharedRecord = Rc<SampleRecord>;
