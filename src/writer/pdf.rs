//! PDF serialization of a laid-out document using lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, ObjectId, Stream, StringFormat};

use crate::error::Result;
use crate::model::{Document, Element, Metadata, Page, Rgb, StandardFont, TextRun};

use super::encoding::encode_win_ansi;

/// PDF version written to the file header.
const PDF_VERSION: &str = "1.7";

/// Writes laid-out documents as PDF bytes.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    compress: bool,
}

impl PdfWriter {
    /// Create a writer; `compress` enables Flate-compressed content streams.
    pub fn new(compress: bool) -> Self {
        Self { compress }
    }

    /// Serialize the document.
    pub fn write(&self, doc: &Document) -> Result<Vec<u8>> {
        let mut pdf = lopdf::Document::with_version(PDF_VERSION);
        let pages_id = pdf.new_object_id();

        let mut fonts = Dictionary::new();
        for font in used_fonts(doc) {
            let font_id = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = pdf.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(doc.pages.len());
        for page in &doc.pages {
            let content = page_content(page);
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box(page),
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => doc.pages.len() as i64,
            "Resources" => resources_id,
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);

        let info_id = info_dictionary(&mut pdf, &doc.metadata);
        pdf.trailer.set("Info", info_id);

        if self.compress {
            pdf.compress();
        }

        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes)?;
        log::debug!(
            "Wrote {} page(s), {} bytes",
            doc.pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Fonts referenced by at least one text run, in resource-name order.
fn used_fonts(doc: &Document) -> Vec<StandardFont> {
    StandardFont::ALL
        .into_iter()
        .filter(|&font| {
            doc.pages
                .iter()
                .flat_map(|page| &page.elements)
                .any(|element| matches!(element, Element::Text(run) if run.font == font))
        })
        .collect()
}

fn media_box(page: &Page) -> Vec<Object> {
    vec![0.into(), 0.into(), page.width.into(), page.height.into()]
}

fn info_dictionary(pdf: &mut lopdf::Document, metadata: &Metadata) -> ObjectId {
    let mut info = Dictionary::new();
    if let Some(ref title) = metadata.title {
        info.set("Title", text_string(title));
    }
    if let Some(ref subject) = metadata.subject {
        info.set("Subject", text_string(subject));
    }
    if let Some(ref creator) = metadata.creator {
        info.set("Creator", text_string(creator));
    }
    if let Some(ref producer) = metadata.producer {
        info.set("Producer", text_string(producer));
    }
    if let Some(created) = metadata.created {
        let date = format!("D:{}Z", created.format("%Y%m%d%H%M%S"));
        info.set("CreationDate", Object::string_literal(date));
    }
    pdf.add_object(info)
}

fn text_string(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}

/// Build the content stream of one page.
///
/// Layout coordinates run top-down; PDF user space runs bottom-up, so every
/// `y` is flipped against the page height here.
fn page_content(page: &Page) -> Content {
    let mut ops = Vec::new();

    for element in &page.elements {
        match element {
            Element::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(fill_color(*fill));
                ops.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        (page.height - y - height).into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            Element::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                let [r, g, b] = color.components();
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
                ops.push(Operation::new("w", vec![(*width).into()]));
                ops.push(Operation::new(
                    "m",
                    vec![(*x1).into(), (page.height - y1).into()],
                ));
                ops.push(Operation::new(
                    "l",
                    vec![(*x2).into(), (page.height - y2).into()],
                ));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            Element::Text(run) => text_ops(&mut ops, run, page.height),
        }
    }

    Content { operations: ops }
}

fn text_ops(ops: &mut Vec<Operation>, run: &TextRun, page_height: f32) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![run.font.resource_name().into(), run.size.into()],
    ));
    ops.push(fill_color(run.color));
    ops.push(Operation::new(
        "Td",
        vec![run.x.into(), (page_height - run.y).into()],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            encode_win_ansi(&run.text),
            StringFormat::Literal,
        )],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn fill_color(color: Rgb) -> Operation {
    let [r, g, b] = color.components();
    Operation::new("rg", vec![r.into(), g.into(), b.into()])
}
