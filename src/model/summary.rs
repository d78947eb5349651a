//! Summary record types received from the summarization service.

use serde::{Deserialize, Serialize};

/// A lecture summary, either an opaque text block or a set of named sections.
///
/// `Raw` and `Structured` are mutually exclusive: when the service could not
/// produce structured JSON it hands back the raw model output instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum SummaryRecord {
    /// Unstructured text, rendered verbatim
    Raw(String),

    /// Named sections, any of which may be absent
    Structured(StructuredSummary),
}

impl SummaryRecord {
    /// Create a raw summary.
    pub fn raw(text: impl Into<String>) -> Self {
        SummaryRecord::Raw(text.into())
    }

    /// Check if this is a raw summary.
    pub fn is_raw(&self) -> bool {
        matches!(self, SummaryRecord::Raw(_))
    }
}

impl Default for SummaryRecord {
    fn default() -> Self {
        SummaryRecord::Structured(StructuredSummary::default())
    }
}

/// The structured form of a summary.
///
/// Every field is optional. Field order here does not affect output order;
/// sections are always exported in [`SectionKind::ALL`](super::SectionKind::ALL) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredSummary {
    /// Short high-level summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<SectionContent>,

    /// Core concepts, usually one per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_concepts: Option<SectionContent>,

    /// Paragraph-wise breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_explanation: Option<SectionContent>,

    /// Examples or use cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<SectionContent>,

    /// Key takeaways, rendered as bullets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeaways: Option<SectionContent>,

    /// Revision questions with answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<SectionContent>,

    /// Further reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<SectionContent>,
}

impl StructuredSummary {
    /// Create an empty structured summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overview text.
    pub fn with_overview(mut self, text: impl Into<String>) -> Self {
        self.overview = Some(SectionContent::Text(text.into()));
        self
    }

    /// Set the core concepts list.
    pub fn with_core_concepts<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_concepts = Some(SectionContent::list(items));
        self
    }

    /// Set the detailed explanation text.
    pub fn with_detailed_explanation(mut self, text: impl Into<String>) -> Self {
        self.detailed_explanation = Some(SectionContent::Text(text.into()));
        self
    }

    /// Set the examples text.
    pub fn with_examples(mut self, text: impl Into<String>) -> Self {
        self.examples = Some(SectionContent::Text(text.into()));
        self
    }

    /// Set the takeaways list.
    pub fn with_takeaways<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.takeaways = Some(SectionContent::list(items));
        self
    }

    /// Set the revision questions.
    pub fn with_questions(mut self, questions: Vec<QuestionAnswer>) -> Self {
        self.questions = Some(SectionContent::Questions(questions));
        self
    }

    /// Set the resources.
    pub fn with_resources(mut self, resources: Vec<ResourceLink>) -> Self {
        self.resources = Some(SectionContent::Resources(resources));
        self
    }

    /// Check if no section has any content.
    pub fn is_empty(&self) -> bool {
        [
            &self.overview,
            &self.core_concepts,
            &self.detailed_explanation,
            &self.examples,
            &self.takeaways,
            &self.questions,
            &self.resources,
        ]
        .iter()
        .all(|field| field.as_ref().map_or(true, SectionContent::is_empty))
    }
}

/// Content of one summary section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// A block of text
    Text(String),
    /// A list of strings
    List(Vec<String>),
    /// Question/answer pairs
    Questions(Vec<QuestionAnswer>),
    /// Resource links
    Resources(Vec<ResourceLink>),
}

impl SectionContent {
    /// Create a list content from any iterator of strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SectionContent::List(items.into_iter().map(Into::into).collect())
    }

    /// Check if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            SectionContent::Text(text) => text.trim().is_empty(),
            SectionContent::List(items) => items.iter().all(|item| item.trim().is_empty()),
            SectionContent::Questions(items) => items.is_empty(),
            SectionContent::Resources(items) => items.is_empty(),
        }
    }
}

/// A revision question with its answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
}

impl QuestionAnswer {
    /// Create a new question/answer pair.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A link to further reading.
///
/// Missing parts are rendered as placeholders ("Untitled", "Unknown type",
/// "No URL provided").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Resource title
    pub title: Option<String>,
    /// Resource type (e.g. "YouTube", "Book")
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Resource URL
    pub url: Option<String>,
}

impl ResourceLink {
    /// Create a fully specified resource link.
    pub fn new(title: impl Into<String>, kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            kind: Some(kind.into()),
            url: Some(url.into()),
        }
    }

    /// Title, or the placeholder when missing.
    pub fn title_or_placeholder(&self) -> &str {
        non_blank(&self.title).unwrap_or("Untitled")
    }

    /// Type, or the placeholder when missing.
    pub fn kind_or_placeholder(&self) -> &str {
        non_blank(&self.kind).unwrap_or("Unknown type")
    }

    /// URL, or the placeholder when missing.
    pub fn url_or_placeholder(&self) -> &str {
        non_blank(&self.url).unwrap_or("No URL provided")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
