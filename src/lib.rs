//! `iter-chain-bench` measures the throughput of composed, lazily-evaluated
//! iterator pipelines when the same logical content sits behind different
//! structural capabilities.
//!
//! Two pieces make that comparable:
//!
//! - [`matrix`]: a representation matrix exposing one logical sequence per
//!   capability profile (contiguous buffer, growable container, read-only
//!   random-access view, count-only collection view, forward-only sequential
//!   view, on-demand progression, and pre-sorted view), each validated to
//!   yield identical content in identical order
//! - [`pipeline`]: fixed filter/map/reduce chains applied identically across
//!   those representations, plus a [`pipeline::Sink`] that forces evaluation
//!   without retaining output
//!
//! Timing itself lives outside the crate: the criterion bench target
//! (`benches/pipelines.rs`) enumerates (shape × representation) pairs and
//! drives warm-up, iteration, and reporting.
//!
//! ## Quick example
//!
//! ```rust
//! use iter_chain_bench::matrix::ReprMatrix;
//! use iter_chain_bench::pipeline::{single_map, Sink};
//!
//! # fn main() -> Result<(), iter_chain_bench::ReprError> {
//! let matrix = ReprMatrix::build()?;
//! let sink = Sink;
//! for (repr, label) in matrix.numeric_representations() {
//!     sink.drain(single_map(repr));
//!     println!("drained single_map over {label}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: representation matrix, capability labeling, lazy iterators
//! - [`pipeline`]: pipeline shapes and the discarding sink
//! - [`types`]: capability surface and the shared mutable record fixture
//! - [`error`]: error types shared across the crate
//!
//! The crate is single-threaded: the mutating pipeline shapes rely on strictly
//! sequential traversal of the shared record fixtures, and the `Rc` handles
//! they alias make that a compile-time guarantee.

pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod types;

pub use error::{ReprError, ReprResult};
