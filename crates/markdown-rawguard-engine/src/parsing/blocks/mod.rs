//! # Block Structure
//!
//! Splits a page into leaf blocks (paragraphs, fenced and indented code)
//! and records the blockquotes and list items each one sits in.
//!
//! Lines are handled one at a time. [`MarkdownLineClassifier`] turns each
//! line into a [`LineClass`]. [`BlockBuilder`] walks it with a
//! [`classify::LineScan`]: the open containers consume their prefixes
//! first (a `>` for a quote, the content indentation for a list item), then
//! new quote and item markers are opened, and finally the leaf openers in
//! `open` see the rest of the line. Indented code is therefore measured from
//! the innermost container's content column.
//!
//! Every [`BlockNode`] holds spans into the source rope; `content` strips
//! the container prefixes when the tree is assembled. Fenced and indented
//! code is never looked into, so a `>` or `{%` inside a fence stays code.

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::ContentLine;
pub use types::{BlockKind, BlockNode, ContainerFrame};
