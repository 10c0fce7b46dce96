//! Data types and algorithms
//!
//! - `core`: Shared plumbing (configuration, pager wrapper)
//! - `status`: Status report parsing, reconciliation, selection and stats

pub mod core;
pub mod status;
