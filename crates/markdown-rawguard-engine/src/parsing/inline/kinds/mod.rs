//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other parsing
//! - **`TemplateTag`**: delimiters from the configured `TemplateSyntax`
//! - **`Emphasis`**: `*`/`_` delimiters, doubled for strong emphasis
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod template_tag;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use template_tag::TemplateTag;
