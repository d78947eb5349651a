//! Document model types.
//!
//! Two families of types live here: the summary record handed to the
//! exporter (input side), and the laid-out document of positioned drawing
//! elements produced by the layout pass (output side, before PDF encoding).

mod decode;
mod document;
mod page;
mod section;
mod summary;

pub use document::{Document, Metadata};
pub use page::{Element, Page, Rgb, StandardFont, TextRole, TextRun};
pub use section::{flatten, FlatSection, SectionKind};
pub use summary::{QuestionAnswer, ResourceLink, SectionContent, StructuredSummary, SummaryRecord};
