//! Test utilities for manseg development.
//!
//! Provides deterministic value fixtures ([`seeded_values`],
//! [`awkward_values`]) and proptest strategies ([`strategies`]) shared by
//! the unit tests, integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{awkward_values, head_exact_values, seeded_values};
