pub mod annotate;
pub mod io;
pub mod page;
pub mod parsing;
pub mod serialize;
pub mod template;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use annotate::{Annotated, RawLevel, Summary, annotate, transform};
pub use io::*;
pub use page::{Prepared, prepare, prepare_with};
pub use template::TemplateSyntax;
