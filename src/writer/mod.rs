//! Output writers for laid-out documents.

mod encoding;
mod json;
mod pdf;

pub use encoding::{encode_win_ansi, fold_win_ansi};
pub(crate) use encoding::win_ansi_byte;
pub use json::{to_json, JsonFormat};
pub use pdf::PdfWriter;
