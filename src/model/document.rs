//! Document-level types of a laid-out export.

use super::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully laid-out summary document, ready to be written as PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, creation date, etc.)
    pub metadata: Metadata,

    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// All section headers in document order.
    pub fn section_headers(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.section_headers())
            .collect()
    }

    /// All body lines in document order.
    pub fn body_lines(&self) -> Vec<&str> {
        self.pages.iter().flat_map(|page| page.body_lines()).collect()
    }

    /// Footer stamps of every page, in page order.
    pub fn footers(&self) -> Vec<Option<&str>> {
        self.pages.iter().map(|page| page.footer()).collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata, written to the PDF info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Total number of pages
    pub page_count: u32,

    /// Whether the source summary was raw text
    pub raw: bool,
}

impl Metadata {
    /// Metadata for a summary export with the given title.
    pub fn for_summary(title: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            title: Some(title.into()),
            subject: Some("Lecture summary".to_string()),
            creator: Some("Suma".to_string()),
            producer: Some(format!("suma-export {}", env!("CARGO_PKG_VERSION"))),
            created: Some(created),
            ..Default::default()
        }
    }
}
