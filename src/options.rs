//! Export options and configuration.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Default file name for the exported summary.
pub const DEFAULT_FILE_NAME: &str = "Lecture_Summary_Suma.pdf";

/// Options controlling page geometry, typography and output of an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Paper size
    pub page_size: PageSize,

    /// Margin on all four sides, in points
    pub margin: f32,

    /// Title line at the top of the first page
    pub title: String,

    /// Subtitle line under the title
    pub subtitle: String,

    /// Title font size in points
    pub title_size: f32,

    /// Subtitle font size in points
    pub subtitle_size: f32,

    /// Section header font size in points
    pub header_size: f32,

    /// Body font size in points
    pub body_size: f32,

    /// Footer (page number) font size in points
    pub footer_size: f32,

    /// Distance between body baselines
    pub line_height: f32,

    /// Space a section header needs above the bottom margin before
    /// it is pushed onto a fresh page
    pub section_reserve: f32,

    /// File name used when saving into a directory
    pub file_name: String,

    /// Flate-compress page content streams
    pub compress: bool,

    /// Creation timestamp written to the PDF info dictionary (None = now)
    pub created: Option<DateTime<Utc>>,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paper size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the page margin in points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the subtitle line.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the body line height.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Set the output file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Pin the creation timestamp (useful for reproducible output).
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Usable text width between the left and right margins.
    pub fn text_width(&self) -> f32 {
        self.page_size.width() - self.margin * 2.0
    }

    /// Lowest baseline body text may occupy.
    pub fn bottom_limit(&self) -> f32 {
        self.page_size.height() - self.margin
    }

    /// Check that the options describe a page with room for content.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.page_size.width(), self.page_size.height());
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidOptions(format!(
                "page size must be positive, got {}x{}",
                width, height
            )));
        }
        if self.margin.is_nan() || self.margin < 0.0 {
            return Err(Error::InvalidOptions(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.text_width() <= 0.0 {
            return Err(Error::InvalidOptions(format!(
                "margin {}pt leaves no text width",
                self.margin
            )));
        }
        if self.bottom_limit() <= self.margin {
            return Err(Error::InvalidOptions(format!(
                "margin {}pt leaves no text height",
                self.margin
            )));
        }

        let sizes = [
            ("title_size", self.title_size),
            ("subtitle_size", self.subtitle_size),
            ("header_size", self.header_size),
            ("body_size", self.body_size),
            ("footer_size", self.footer_size),
            ("line_height", self.line_height),
        ];
        for (name, value) in sizes {
            if value.is_nan() || value <= 0.0 {
                return Err(Error::InvalidOptions(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.file_name.trim().is_empty() {
            return Err(Error::InvalidOptions("file name is empty".to_string()));
        }

        Ok(())
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin: 40.0,
            title: "Lecture Summary".to_string(),
            subtitle: "Generated by Suma".to_string(),
            title_size: 30.0,
            subtitle_size: 14.0,
            header_size: 18.0,
            body_size: 12.0,
            footer_size: 10.0,
            line_height: 16.0,
            section_reserve: 100.0,
            file_name: DEFAULT_FILE_NAME.to_string(),
            compress: true,
            created: None,
        }
    }
}

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// US Letter (8.5 x 11 inches)
    #[default]
    Letter,
    /// ISO A4 (210 x 297 mm)
    A4,
    /// Arbitrary size in points
    Custom {
        /// Width in points
        width: f32,
        /// Height in points
        height: f32,
    },
}

impl PageSize {
    /// Page width in points.
    pub fn width(&self) -> f32 {
        match self {
            PageSize::Letter => 612.0, // 8.5 * 72
            PageSize::A4 => 595.28,    // 210mm * 2.8346
            PageSize::Custom { width, .. } => *width,
        }
    }

    /// Page height in points.
    pub fn height(&self) -> f32 {
        match self {
            PageSize::Letter => 792.0, // 11 * 72
            PageSize::A4 => 841.89,    // 297mm * 2.8346
            PageSize::Custom { height, .. } => *height,
        }
    }

    /// Parse a size name ("letter", "a4") or explicit points ("612x792").
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "letter" | "us-letter" => return Ok(PageSize::Letter),
            "a4" => return Ok(PageSize::A4),
            _ => {}
        }

        let (width, height) = name
            .split_once('x')
            .ok_or_else(|| format!("Unknown page size: {}", name))?;
        let width = parse_points(width)?;
        let height = parse_points(height)?;
        Ok(PageSize::Custom { width, height })
    }
}

fn parse_points(s: &str) -> std::result::Result<f32, String> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid page dimension: {}", s.trim()))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("Page dimension must be positive: {}", s.trim()))
    }
}
