//! Layout of summaries onto fixed-size pages.

mod cursor;
mod engine;
mod font;
mod wrap;

pub use cursor::LayoutCursor;
pub use engine::LayoutEngine;
pub use wrap::wrap_text;
