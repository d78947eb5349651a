//! Page-level types of a laid-out document.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page and `y` growing downwards, matching the order in which the layout
//! cursor walks the page. Text `y` values are baselines.

use serde::{Deserialize, Serialize};

/// A single laid-out page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Drawing elements in paint order
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0)
    }

    /// Add an element to the page.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Iterate over text runs with the given role.
    pub fn texts(&self, role: TextRole) -> impl Iterator<Item = &TextRun> + '_ {
        self.elements.iter().filter_map(move |e| match e {
            Element::Text(run) if run.role == role => Some(run),
            _ => None,
        })
    }

    /// Section header titles on this page, top to bottom.
    pub fn section_headers(&self) -> Vec<&str> {
        self.texts(TextRole::SectionHeader)
            .map(|run| run.text.as_str())
            .collect()
    }

    /// Body lines on this page, top to bottom.
    pub fn body_lines(&self) -> Vec<&str> {
        self.texts(TextRole::Body).map(|run| run.text.as_str()).collect()
    }

    /// The page number stamp, once the footer pass has run.
    pub fn footer(&self) -> Option<&str> {
        self.texts(TextRole::Footer)
            .map(|run| run.text.as_str())
            .next()
    }

    /// Number of shaded section bands on this page.
    pub fn band_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Rect { .. }))
            .count()
    }
}

/// A drawing element on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A single line of text
    Text(TextRun),

    /// A filled rectangle
    Rect {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        width: f32,
        /// Height
        height: f32,
        /// Fill color
        fill: Rgb,
    },

    /// A stroked straight line
    Line {
        /// Start x
        x1: f32,
        /// Start y
        y1: f32,
        /// End x
        x2: f32,
        /// End y
        y2: f32,
        /// Stroke width
        width: f32,
        /// Stroke color
        color: Rgb,
    },
}

/// A positioned line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content (unencoded)
    pub text: String,
    /// Left edge of the run
    pub x: f32,
    /// Baseline
    pub y: f32,
    /// Font face
    pub font: StandardFont,
    /// Font size in points
    pub size: f32,
    /// Fill color
    pub color: Rgb,
    /// What the run represents
    pub role: TextRole,
}

/// Semantic role of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Document title on the first page
    Title,
    /// Line under the title
    Subtitle,
    /// Section header drawn over a shaded band
    SectionHeader,
    /// Wrapped body text
    Body,
    /// "Page i of N" stamp
    Footer,
}

/// The base-14 PDF fonts used by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardFont {
    /// Title, subtitle and section headers
    HelveticaBold,
    /// Page number footers
    HelveticaOblique,
    /// Body text
    TimesRoman,
}

impl StandardFont {
    /// All fonts, in resource-name order.
    pub const ALL: [StandardFont; 3] = [
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::TimesRoman,
    ];

    /// PostScript base font name.
    pub fn base_name(self) -> &'static str {
        match self {
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::TimesRoman => "Times-Roman",
        }
    }

    /// Name of the font in a page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::HelveticaBold => "F1",
            StandardFont::HelveticaOblique => "F2",
            StandardFont::TimesRoman => "F3",
        }
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// A neutral grey with all channels equal.
    pub const fn gray(level: u8) -> Self {
        Rgb(level, level, level)
    }

    /// Channels scaled to 0.0..=1.0 for PDF color operators.
    pub fn components(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}
