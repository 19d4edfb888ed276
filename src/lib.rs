//! Data Standard Report
//!
//! Renders a tabular report describing which attributes apply to a category,
//! and its ancestor categories, within a hierarchical product data-standard
//! model. Each row names a category, an attribute, its description, a type
//! signature (recursively expanded for composite types), and the attribute's
//! group names.
//!
//! ## Features
//!
//! - **Ancestor resolution**: root-to-leaf category chains, tolerant of
//!   broken parent references and guarded against parent cycles
//! - **Deduplication**: an attribute inherited from several levels is
//!   reported once, against its first (root-most) occurrence
//! - **Recursive type signatures**: composite attributes expand into
//!   indented, brace-delimited blocks, arbitrarily nested
//! - **Lazy output**: rows are produced on demand through an iterator
//!
//! ## Architecture
//!
//! ```text
//! loader ──> Datastandard ──> lookup (indexes, ancestor chain)
//!                                │
//!                                v
//!                             report (dedup row iterator)
//!                                │
//!                                v
//!                             format (names, descriptions, signatures)
//! ```
//!
//! Dangling references are tolerated everywhere by skipping, never by
//! raising: an unknown starting category yields a header-only report.

pub mod error;
pub mod format;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod report;

pub use error::{ReportError, Result};
pub use model::{
    Attribute, AttributeGroup, AttributeLink, AttributeType, Category, Datastandard,
};
pub use report::{generate, report, ReportRows, Row};
