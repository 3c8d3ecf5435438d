pub mod block_quote;
pub mod code_fence;
pub mod indented_code;
pub mod list_item;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use indented_code::IndentedCode;
pub use list_item::{ListItem, ListMarker, MarkerKind};
pub use paragraph::Paragraph;
