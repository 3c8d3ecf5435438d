//! # Inline Spans
//!
//! Finds code spans, template tags and emphasis inside a paragraph's
//! joined content, producing [`InlineNode`]s with document spans.
//!
//! Precedence, highest first:
//!
//! 1. code spans, whose content is never inspected (`` `{% raw %}` `` is
//!    code, not a directive)
//! 2. template tags in the configured delimiters
//! 3. `*`/`_` emphasis, whose content is parsed again
//!
//! A backslash before punctuation keeps that byte literal. Delimiters that
//! never close are left as text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
