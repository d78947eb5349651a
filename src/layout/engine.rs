//! Two-pass layout of a summary into pages.
//!
//! The content pass walks the summary top to bottom with a [`LayoutCursor`],
//! breaking pages as needed. Page numbers depend on the final page count, so
//! they are stamped in a second pass once every page exists.

use chrono::Utc;

use crate::error::Result;
use crate::model::{
    Document, Element, FlatSection, Metadata, Page, Rgb, StandardFont, SummaryRecord, TextRole,
    TextRun,
};
use crate::options::ExportOptions;
use crate::writer::fold_win_ansi;

use super::{wrap_text, LayoutCursor};

const TITLE_FONT: StandardFont = StandardFont::HelveticaBold;
const HEADER_FONT: StandardFont = StandardFont::HelveticaBold;
const BODY_FONT: StandardFont = StandardFont::TimesRoman;
const FOOTER_FONT: StandardFont = StandardFont::HelveticaOblique;

const TITLE_COLOR: Rgb = Rgb(30, 30, 60);
const SUBTITLE_COLOR: Rgb = Rgb::gray(100);
const RULE_COLOR: Rgb = Rgb::gray(200);
const BAND_FILL: Rgb = Rgb(225, 240, 255);
const HEADER_COLOR: Rgb = Rgb(30, 80, 160);
const BODY_COLOR: Rgb = Rgb::gray(30);
const FOOTER_COLOR: Rgb = Rgb::gray(150);

const TITLE_ADVANCE: f32 = 30.0;
const SUBTITLE_ADVANCE: f32 = 20.0;
const RULE_ADVANCE: f32 = 20.0;
const RULE_WIDTH: f32 = 0.5;

/// Band height and how far it reaches below the header baseline.
const BAND_HEIGHT: f32 = 24.0;
const BAND_DESCENT: f32 = 4.0;
const HEADER_INSET: f32 = 4.0;
const HEADER_ADVANCE: f32 = 28.0;

/// Footer baseline distance from the bottom edge.
const FOOTER_OFFSET: f32 = 20.0;

/// Lays out summaries according to a set of export options.
pub struct LayoutEngine<'a> {
    options: &'a ExportOptions,
}

impl<'a> LayoutEngine<'a> {
    /// Create a layout engine.
    pub fn new(options: &'a ExportOptions) -> Self {
        Self { options }
    }

    /// Lay out a summary into pages, page numbers included.
    pub fn layout(&self, summary: &SummaryRecord) -> Result<Document> {
        self.options.validate()?;

        let size = self.options.page_size;
        let mut cursor = LayoutCursor::new(size.width(), size.height(), self.options.margin);

        self.title_block(&mut cursor);

        match summary {
            SummaryRecord::Raw(text) => {
                log::debug!("Laying out raw summary ({} bytes)", text.len());
                self.body(&mut cursor, text);
            }
            SummaryRecord::Structured(structured) => {
                if structured.is_empty() {
                    log::warn!("Structured summary has no content; exporting title block only");
                }
                let sections = structured.sections();
                log::debug!("Laying out {} structured sections", sections.len());
                for section in &sections {
                    self.section(&mut cursor, section);
                }
            }
        }

        let mut pages = cursor.into_pages();
        self.stamp_page_numbers(&mut pages);

        let created = self.options.created.unwrap_or_else(Utc::now);
        let mut metadata = Metadata::for_summary(self.options.title.clone(), created);
        metadata.page_count = pages.len() as u32;
        metadata.raw = summary.is_raw();

        Ok(Document { metadata, pages })
    }

    fn title_block(&self, cursor: &mut LayoutCursor) {
        let opts = self.options;

        self.centered(cursor, &opts.title, opts.title_size, TITLE_COLOR, TextRole::Title);
        cursor.advance(TITLE_ADVANCE);

        self.centered(
            cursor,
            &opts.subtitle,
            opts.subtitle_size,
            SUBTITLE_COLOR,
            TextRole::Subtitle,
        );
        cursor.advance(SUBTITLE_ADVANCE);

        let y = cursor.y();
        cursor.push(Element::Line {
            x1: opts.margin,
            y1: y,
            x2: opts.page_size.width() - opts.margin,
            y2: y,
            width: RULE_WIDTH,
            color: RULE_COLOR,
        });
        cursor.advance(RULE_ADVANCE);
    }

    fn centered(&self, cursor: &mut LayoutCursor, text: &str, size: f32, color: Rgb, role: TextRole) {
        let text = fold_win_ansi(text);
        let width = TITLE_FONT.measure(&text, size);
        cursor.push(Element::Text(TextRun {
            text,
            x: (self.options.page_size.width() - width) / 2.0,
            y: cursor.y(),
            font: TITLE_FONT,
            size,
            color,
            role,
        }));
    }

    fn section(&self, cursor: &mut LayoutCursor, section: &FlatSection) {
        let opts = self.options;

        // Keep the header together with at least its first body line.
        let reserve = opts.section_reserve.max(HEADER_ADVANCE);
        if cursor.break_if_past(opts.bottom_limit() - reserve) {
            log::debug!("Moved section '{}' to a new page", section.title);
        }

        let y = cursor.y();
        cursor.push(Element::Rect {
            x: opts.margin,
            y: y - BAND_HEIGHT + BAND_DESCENT,
            width: opts.text_width(),
            height: BAND_HEIGHT,
            fill: BAND_FILL,
        });
        cursor.push(Element::Text(TextRun {
            text: section.title.to_string(),
            x: opts.margin + HEADER_INSET,
            y,
            font: HEADER_FONT,
            size: opts.header_size,
            color: HEADER_COLOR,
            role: TextRole::SectionHeader,
        }));
        cursor.advance(HEADER_ADVANCE);

        self.body(cursor, &section.body);
        cursor.advance(opts.line_height);
    }

    fn body(&self, cursor: &mut LayoutCursor, text: &str) {
        let opts = self.options;
        let lines = wrap_text(text, BODY_FONT, opts.body_size, opts.text_width());

        for line in lines {
            cursor.break_if_past(opts.bottom_limit());
            if !line.is_empty() {
                cursor.push(Element::Text(TextRun {
                    text: line,
                    x: opts.margin,
                    y: cursor.y(),
                    font: BODY_FONT,
                    size: opts.body_size,
                    color: BODY_COLOR,
                    role: TextRole::Body,
                }));
            }
            cursor.advance(opts.line_height);
        }
    }

    fn stamp_page_numbers(&self, pages: &mut [Page]) {
        let total = pages.len();
        let size = self.options.footer_size;

        for (index, page) in pages.iter_mut().enumerate() {
            let text = format!("Page {} of {}", index + 1, total);
            let width = FOOTER_FONT.measure(&text, size);
            let x = page.width - self.options.margin - width;
            let y = page.height - FOOTER_OFFSET;
            page.push(Element::Text(TextRun {
                text,
                x,
                y,
                font: FOOTER_FONT,
                size,
                color: FOOTER_COLOR,
                role: TextRole::Footer,
            }));
        }
    }
}
