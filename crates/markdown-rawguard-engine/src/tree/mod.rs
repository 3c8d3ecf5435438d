//! # Document Tree
//!
//! The tree the annotator works on: a closed set of node variants
//! (containers, code blocks, text, directives) with owned children.
//! Trees are values; passes build new trees rather than mutating.

pub mod code;
pub mod directive;
pub mod node;
pub mod text;

pub use code::{CodeBlock, CodeStyle};
pub use directive::{Directive, DirectiveKind};
pub use node::{Container, ContainerKind, Document, Node, NodeKind};
pub use text::{Mark, MarkKind, Range, Text};
