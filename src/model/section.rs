//! Canonical section order and flattening of section content to text.

use serde::{Deserialize, Serialize};

use super::{SectionContent, StructuredSummary};

/// The named sections of a structured summary, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// "Overview"
    Overview,
    /// "Core Concepts"
    CoreConcepts,
    /// "Detailed Explanation"
    DetailedExplanation,
    /// "Examples"
    Examples,
    /// "Key Takeaways", bulleted
    Takeaways,
    /// "Revision Questions"
    Questions,
    /// "Resources"
    Resources,
}

impl SectionKind {
    /// All sections in canonical export order.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Overview,
        SectionKind::CoreConcepts,
        SectionKind::DetailedExplanation,
        SectionKind::Examples,
        SectionKind::Takeaways,
        SectionKind::Questions,
        SectionKind::Resources,
    ];

    /// JSON key used by the summarization service.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Overview => "overview",
            SectionKind::CoreConcepts => "core_concepts",
            SectionKind::DetailedExplanation => "detailed_explanation",
            SectionKind::Examples => "examples",
            SectionKind::Takeaways => "takeaways",
            SectionKind::Questions => "questions",
            SectionKind::Resources => "resources",
        }
    }

    /// Header shown in the exported document.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Overview => "Overview",
            SectionKind::CoreConcepts => "Core Concepts",
            SectionKind::DetailedExplanation => "Detailed Explanation",
            SectionKind::Examples => "Examples",
            SectionKind::Takeaways => "Key Takeaways",
            SectionKind::Questions => "Revision Questions",
            SectionKind::Resources => "Resources",
        }
    }

    /// Prefix for each entry of a plain string list.
    fn list_marker(self) -> Option<&'static str> {
        match self {
            SectionKind::Takeaways => Some("\u{2022} "),
            _ => None,
        }
    }
}

impl StructuredSummary {
    /// Content of a section, if present.
    pub fn field(&self, kind: SectionKind) -> Option<&SectionContent> {
        match kind {
            SectionKind::Overview => self.overview.as_ref(),
            SectionKind::CoreConcepts => self.core_concepts.as_ref(),
            SectionKind::DetailedExplanation => self.detailed_explanation.as_ref(),
            SectionKind::Examples => self.examples.as_ref(),
            SectionKind::Takeaways => self.takeaways.as_ref(),
            SectionKind::Questions => self.questions.as_ref(),
            SectionKind::Resources => self.resources.as_ref(),
        }
    }

    /// Mutable slot for a section.
    pub fn field_mut(&mut self, kind: SectionKind) -> &mut Option<SectionContent> {
        match kind {
            SectionKind::Overview => &mut self.overview,
            SectionKind::CoreConcepts => &mut self.core_concepts,
            SectionKind::DetailedExplanation => &mut self.detailed_explanation,
            SectionKind::Examples => &mut self.examples,
            SectionKind::Takeaways => &mut self.takeaways,
            SectionKind::Questions => &mut self.questions,
            SectionKind::Resources => &mut self.resources,
        }
    }

    /// Present, non-empty sections in canonical order, flattened to text.
    pub fn sections(&self) -> Vec<FlatSection> {
        SectionKind::ALL
            .iter()
            .filter_map(|&kind| {
                let content = self.field(kind)?;
                if content.is_empty() {
                    return None;
                }
                Some(FlatSection {
                    kind,
                    title: kind.title(),
                    body: flatten(kind, content),
                })
            })
            .collect()
    }
}

/// A section ready for layout: header title plus plain body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatSection {
    /// Which section this is
    pub kind: SectionKind,
    /// Header text
    pub title: &'static str,
    /// Body text; `\n` marks hard line breaks
    pub body: String,
}

/// Flatten section content into newline-separated text.
pub fn flatten(kind: SectionKind, content: &SectionContent) -> String {
    match content {
        SectionContent::Text(text) => text.clone(),
        SectionContent::List(items) => {
            let marker = kind.list_marker().unwrap_or("");
            items
                .iter()
                .filter(|item| !item.trim().is_empty())
                .map(|item| format!("{}{}", marker, item))
                .collect::<Vec<_>>()
                .join("\n")
        }
        SectionContent::Questions(items) => items
            .iter()
            .enumerate()
            .map(|(i, qa)| format!("{}. Q: {}\n   A: {}", i + 1, qa.question, qa.answer))
            .collect::<Vec<_>>()
            .join("\n\n"),
        SectionContent::Resources(items) => items
            .iter()
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "{}. {} ({})\n   {}",
                    i + 1,
                    r.title_or_placeholder(),
                    r.kind_or_placeholder(),
                    r.url_or_placeholder()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionAnswer, ResourceLink};

    #[test]
    fn test_canonical_order_ignores_construction_order() {
        let summary = StructuredSummary::new()
            .with_resources(vec![ResourceLink::new("Docs", "Website", "https://x.y")])
            .with_takeaways(["B"])
            .with_overview("First.");

        let titles: Vec<_> = summary.sections().iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Overview", "Key Takeaways", "Resources"]);
    }

    #[test]
    fn test_empty_sections_skipped() {
        let summary = StructuredSummary::new()
            .with_overview("Only this.")
            .with_core_concepts(Vec::<String>::new())
            .with_examples("  \n ");

        let sections = summary.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::Overview);
    }

    #[test]
    fn test_takeaways_bulleted() {
        let body = flatten(SectionKind::Takeaways, &SectionContent::list(["A", "B"]));
        assert_eq!(body, "\u{2022} A\n\u{2022} B");
    }

    #[test]
    fn test_blank_list_entries_skipped() {
        let body = flatten(SectionKind::Takeaways, &SectionContent::list(["A", " ", "B"]));
        assert_eq!(body, "\u{2022} A\n\u{2022} B");

        let summary = StructuredSummary::new()
            .with_overview("Kept.")
            .with_takeaways(["", "  "]);
        let titles: Vec<_> = summary.sections().iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Overview"]);
    }

    #[test]
    fn test_core_concepts_one_per_line() {
        let body = flatten(SectionKind::CoreConcepts, &SectionContent::list(["X", "Y"]));
        assert_eq!(body, "X\nY");
    }

    #[test]
    fn test_questions_format() {
        let body = flatten(
            SectionKind::Questions,
            &SectionContent::Questions(vec![
                QuestionAnswer::new("What?", "That."),
                QuestionAnswer::new("Why?", "Because."),
            ]),
        );
        assert_eq!(
            body,
            "1. Q: What?\n   A: That.\n\n2. Q: Why?\n   A: Because."
        );
    }

    #[test]
    fn test_resources_format_with_placeholders() {
        let body = flatten(
            SectionKind::Resources,
            &SectionContent::Resources(vec![
                ResourceLink::new("Rust Book", "Book", "https://doc.rust-lang.org/book"),
                ResourceLink::default(),
            ]),
        );
        assert_eq!(
            body,
            "1. Rust Book (Book)\n   https://doc.rust-lang.org/book\n\n\
             2. Untitled (Unknown type)\n   No URL provided"
        );
    }

    #[test]
    fn test_section_keys_round_trip() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }
}
