//! # suma-export
//!
//! Lecture summary export for Rust.
//!
//! This library takes a lecture summary, either raw model output or a
//! structured set of named sections, and renders it as a paginated,
//! styled PDF with a title block, shaded section headers, word-wrapped
//! body text and "Page i of N" footers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use suma_export::{export, StructuredSummary, SummaryRecord};
//!
//! fn main() -> suma_export::Result<()> {
//!     let summary = StructuredSummary::new()
//!         .with_overview("An introduction to graph theory.")
//!         .with_takeaways(["Graphs model pairwise relations", "Trees are acyclic"]);
//!
//!     let pdf = export(&SummaryRecord::Structured(summary))?;
//!     std::fs::write("Lecture_Summary_Suma.pdf", pdf)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lenient input**: summarizer JSON is decoded field by field; malformed
//!   optional fields are dropped instead of failing the export
//! - **Canonical section order**: Overview through Resources, whatever the input order
//! - **Pagination**: no orphaned section headers, content never below the bottom margin
//! - **Two-pass numbering**: footers stamped once the final page count is known

pub mod error;
pub mod layout;
pub mod model;
pub mod options;
pub mod writer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::LayoutEngine;
pub use model::{
    Document, Element, Metadata, Page, QuestionAnswer, ResourceLink, SectionContent,
    SectionKind, StructuredSummary, SummaryRecord, TextRole,
};
pub use options::{ExportOptions, PageSize, DEFAULT_FILE_NAME};
pub use writer::{JsonFormat, PdfWriter};

use std::path::{Path, PathBuf};

/// Export a summary to PDF bytes with default options.
///
/// # Example
///
/// ```no_run
/// use suma_export::{export, SummaryRecord};
///
/// let pdf = export(&SummaryRecord::raw("The lecture covered ...")).unwrap();
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
pub fn export(summary: &SummaryRecord) -> Result<Vec<u8>> {
    Ok(Exporter::new().export(summary)?.bytes)
}

/// Lay out a summary without writing PDF bytes.
///
/// # Example
///
/// ```no_run
/// use suma_export::{layout, StructuredSummary, SummaryRecord};
///
/// let summary = StructuredSummary::new().with_overview("Test.");
/// let doc = layout(&SummaryRecord::Structured(summary)).unwrap();
/// assert_eq!(doc.section_headers(), vec!["Overview"]);
/// ```
pub fn layout(summary: &SummaryRecord) -> Result<Document> {
    Exporter::new().layout(summary)
}

/// Decode a summarizer JSON response and export it.
///
/// # Example
///
/// ```no_run
/// use suma_export::export_json;
///
/// let pdf = export_json(r#"{"overview": "Test.", "takeaways": ["A", "B"]}"#).unwrap();
/// std::fs::write("summary.pdf", pdf).unwrap();
/// ```
pub fn export_json(json: &str) -> Result<Vec<u8>> {
    let summary = SummaryRecord::from_json_str(json)?;
    export(&summary)
}

/// Export a summary and write it to disk.
///
/// When `path` is an existing directory the file is named
/// [`DEFAULT_FILE_NAME`] inside it. Returns the path written.
///
/// # Example
///
/// ```no_run
/// use suma_export::{export_to_file, SummaryRecord};
///
/// let path = export_to_file(&SummaryRecord::raw("notes"), "./out").unwrap();
/// println!("Saved {}", path.display());
/// ```
pub fn export_to_file<P: AsRef<Path>>(summary: &SummaryRecord, path: P) -> Result<PathBuf> {
    Exporter::new().export(summary)?.save(path)
}

/// Export a summary and write it to disk without blocking the runtime.
#[cfg(feature = "async")]
pub async fn export_to_file_async<P: AsRef<Path>>(
    summary: &SummaryRecord,
    path: P,
) -> Result<PathBuf> {
    let exported = Exporter::new().export(summary)?;
    let target = exported.target_path(path.as_ref());
    tokio::fs::write(&target, &exported.bytes).await?;
    Ok(target)
}

/// Builder for exporting summaries with custom options.
///
/// # Example
///
/// ```no_run
/// use suma_export::{Exporter, PageSize, SummaryRecord};
///
/// let exported = Exporter::new()
///     .with_page_size(PageSize::A4)
///     .with_subtitle("CS 101, Week 3")
///     .export(&SummaryRecord::raw("..."))?;
/// exported.save(".")?;
/// # Ok::<(), suma_export::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create a new exporter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter from explicit options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Set the paper size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.options = self.options.with_page_size(size);
        self
    }

    /// Set the page margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.options = self.options.with_margin(margin);
        self
    }

    /// Set the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Set the subtitle line.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.options = self.options.with_subtitle(subtitle);
        self
    }

    /// Set the output file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_file_name(name);
        self
    }

    /// Disable content stream compression.
    pub fn uncompressed(mut self) -> Self {
        self.options = self.options.with_compression(false);
        self
    }

    /// Get the export options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Lay out a summary into pages.
    pub fn layout(&self, summary: &SummaryRecord) -> Result<Document> {
        LayoutEngine::new(&self.options).layout(summary)
    }

    /// Lay out and write a summary.
    pub fn export(&self, summary: &SummaryRecord) -> Result<ExportedPdf> {
        let document = self.layout(summary)?;
        let bytes = PdfWriter::new(self.options.compress).write(&document)?;
        log::debug!(
            "Exported '{}' with {} page(s)",
            self.options.file_name,
            document.page_count()
        );
        Ok(ExportedPdf {
            bytes,
            file_name: self.options.file_name.clone(),
            document,
        })
    }
}

/// A finished export.
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    /// PDF file content
    pub bytes: Vec<u8>,
    /// Suggested file name
    pub file_name: String,
    /// The laid-out document the bytes were written from
    pub document: Document,
}

impl ExportedPdf {
    /// Number of pages in the PDF.
    pub fn page_count(&self) -> u32 {
        self.document.page_count()
    }

    /// Write the PDF to `path`, or into it under [`Self::file_name`] when
    /// `path` is a directory. Returns the path written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let target = self.target_path(path.as_ref());
        std::fs::write(&target, &self.bytes)?;
        Ok(target)
    }

    fn target_path(&self, path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(&self.file_name)
        } else {
            path.to_path_buf()
        }
    }
}
