//! Chained-pipeline shapes and the drain sink.
//!
//! Every shape is a fixed, named composition of filter/map/reduce stages,
//! applied identically across representations so timings are comparable. The
//! builders return unevaluated `impl Iterator` chains; nothing runs until the
//! terminal drain or reduction, and elements move through the whole chain one
//! at a time. A stage never materializes an intermediate buffer: a
//! phase-by-phase rendition would measure a different cost profile entirely.
//!
//! Shapes:
//!
//! - [`single_map`]: one element-wise transform
//! - [`filter_map_x1`] .. [`filter_map_x5`]: even filter plus 1–5 chained maps,
//!   for the marginal cost of chain depth
//! - [`mutating_map`], [`filter_then_mutating_map`], [`multi_mutating_map`]:
//!   chains whose transforms mutate the shared records in place
//! - [`classify_filter_reduce`]: classification chain ending in a sum instead
//!   of a drain
//!
//! ## Example: drain one shape across every numeric representation
//!
//! ```rust
//! use iter_chain_bench::matrix::ReprMatrix;
//! use iter_chain_bench::pipeline::{filter_map_x2, Sink};
//!
//! # fn main() -> Result<(), iter_chain_bench::ReprError> {
//! let matrix = ReprMatrix::build()?;
//! let sink = Sink;
//! for (repr, _label) in matrix.numeric_representations() {
//!     sink.drain(filter_map_x2(repr));
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod numeric;
pub mod record;
pub mod sink;

pub use classify::{classification_fixture, classify_filter_reduce, Token};
pub use numeric::{
    filter_map_x1, filter_map_x2, filter_map_x3, filter_map_x4, filter_map_x5, single_map,
};
pub use record::{filter_then_mutating_map, multi_mutating_map, mutating_map};
pub use sink::Sink;
