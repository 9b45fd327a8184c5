//! Infrastructure adapters for sailpma.
//!
//! Implements the driven ports declared in `sailpma_core::application::ports`:
//! - [`LocalFilesystem`] - production adapter over `std::fs`
//! - [`MemoryFilesystem`] - in-memory adapter for tests

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
