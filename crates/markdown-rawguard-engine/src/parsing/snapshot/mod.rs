//! # Snapshot Testing Support
//!
//! Utilities for testing the parser and annotator via snapshot assertions
//! and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a [`Document`](crate::tree::Document) as an
//!   indented, one-node-per-line outline for `insta` snapshots
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   line spans contained in their blocks, prefixes before content)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
