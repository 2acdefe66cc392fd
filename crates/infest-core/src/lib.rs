//! Core types and errors for the Infest automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared across the workspace: grid coordinates,
//! generation counters, serialized state keys, and the grid error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;

pub use coord::Coord;
pub use error::GridError;
pub use id::{Generation, StateKey};
