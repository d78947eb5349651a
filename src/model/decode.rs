//! Lenient decoding of summarizer output into [`SummaryRecord`].
//!
//! The summarization service returns loosely shaped JSON: a field declared
//! as a list may arrive as a single string or object, and model output may
//! contain fields of the wrong type altogether. Decoding never fails on a
//! single bad field; the field is logged and dropped so the remaining
//! sections still export.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::{QuestionAnswer, ResourceLink, SectionContent, SectionKind, StructuredSummary, SummaryRecord};

impl SummaryRecord {
    /// Decode a summary from the summarizer's JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Decode a summary from an already parsed JSON value.
    ///
    /// A string-valued `raw` key always wins over structured fields. A bare
    /// JSON string is treated as a raw summary. Anything other than an object
    /// or a string is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(SummaryRecord::Raw(text)),
            Value::Object(map) => Ok(decode_object(map)),
            other => Err(Error::Json(format!(
                "expected a summary object, found {}",
                type_name(&other)
            ))),
        }
    }
}

impl TryFrom<Value> for SummaryRecord {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        SummaryRecord::from_value(value)
    }
}

fn decode_object(mut map: Map<String, Value>) -> SummaryRecord {
    match map.remove("raw") {
        Some(Value::String(text)) => return SummaryRecord::Raw(text),
        Some(Value::Null) | None => {}
        Some(other) => {
            log::warn!(
                "Ignoring non-string 'raw' field ({}), using structured fields",
                type_name(&other)
            );
        }
    }

    let mut summary = StructuredSummary::new();
    for kind in SectionKind::ALL {
        let Some(value) = map.remove(kind.key()) else {
            continue;
        };
        let content = decode_section(kind, value);
        *summary.field_mut(kind) = content;
    }

    if !map.is_empty() {
        log::debug!(
            "Ignoring unknown summary fields: {}",
            map.keys().cloned().collect::<Vec<_>>().join(", ")
        );
    }

    SummaryRecord::Structured(summary)
}

fn decode_section(kind: SectionKind, value: Value) -> Option<SectionContent> {
    if value.is_null() {
        return None;
    }

    let found = type_name(&value);
    let content = match kind {
        SectionKind::Questions => decode_questions(value),
        SectionKind::Resources => decode_resources(value),
        _ => decode_text(value),
    };

    if content.is_none() {
        log::warn!(
            "Omitting section '{}': unexpected content shape ({})",
            kind.key(),
            found
        );
    }
    content
}

/// A string, or a list made only of strings.
fn decode_text(value: Value) -> Option<SectionContent> {
    match value {
        Value::String(text) => Some(SectionContent::Text(text)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(SectionContent::List),
        _ => None,
    }
}

/// Question/answer objects. Every entry must carry at least one of the two keys.
fn decode_questions(value: Value) -> Option<SectionContent> {
    let items = object_items(value)?;
    if items
        .iter()
        .any(|map| !map.contains_key("question") && !map.contains_key("answer"))
    {
        return None;
    }

    Some(SectionContent::Questions(
        items
            .iter()
            .map(|map| QuestionAnswer {
                question: scalar_text(map.get("question")).unwrap_or_default(),
                answer: scalar_text(map.get("answer")).unwrap_or_default(),
            })
            .collect(),
    ))
}

/// Resource objects. Missing keys fall back to placeholders at render time.
fn decode_resources(value: Value) -> Option<SectionContent> {
    let items = object_items(value)?;
    Some(SectionContent::Resources(
        items
            .iter()
            .map(|map| ResourceLink {
                title: scalar_text(map.get("title")),
                kind: scalar_text(map.get("type")),
                url: scalar_text(map.get("url")),
            })
            .collect(),
    ))
}

/// A single object or a list made only of objects.
fn object_items(value: Value) -> Option<Vec<Map<String, Value>>> {
    match value {
        Value::Object(map) => Some(vec![map]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

/// Text form of a scalar JSON value. Containers and null yield `None`.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(value: Value) -> StructuredSummary {
        match SummaryRecord::from_value(value).unwrap() {
            SummaryRecord::Structured(s) => s,
            SummaryRecord::Raw(_) => panic!("Expected Structured variant"),
        }
    }

    #[test]
    fn test_raw_takes_priority() {
        let record = SummaryRecord::from_value(json!({
            "raw": "model said something",
            "overview": "ignored"
        }))
        .unwrap();
        assert_eq!(record, SummaryRecord::Raw("model said something".to_string()));
    }

    #[test]
    fn test_non_string_raw_falls_back_to_structured() {
        let summary = structured(json!({ "raw": 42, "overview": "Kept." }));
        assert_eq!(summary.overview, Some(SectionContent::Text("Kept.".into())));
    }

    #[test]
    fn test_bare_string_is_raw() {
        let record = SummaryRecord::from_json_str("\"just text\"").unwrap();
        assert!(record.is_raw());
    }

    #[test]
    fn test_non_object_is_error() {
        assert!(matches!(
            SummaryRecord::from_json_str("[1, 2]"),
            Err(Error::Json(_))
        ));
        assert!(SummaryRecord::from_json_str("not json").is_err());
    }

    #[test]
    fn test_full_service_shape() {
        let summary = structured(json!({
            "overview": "Intro to graphs.",
            "core_concepts": ["Vertices", "Edges"],
            "detailed_explanation": "Long text.",
            "examples": "Road networks.",
            "takeaways": ["Graphs model relations"],
            "questions": [
                { "question": "What is a vertex?", "answer": "A node." }
            ],
            "resources": [
                { "title": "CLRS", "type": "Book", "url": "https://example.com/clrs" }
            ]
        }));

        assert_eq!(
            summary.core_concepts,
            Some(SectionContent::list(["Vertices", "Edges"]))
        );
        assert_eq!(
            summary.questions,
            Some(SectionContent::Questions(vec![QuestionAnswer::new(
                "What is a vertex?",
                "A node."
            )]))
        );
        assert_eq!(
            summary.resources,
            Some(SectionContent::Resources(vec![ResourceLink::new(
                "CLRS",
                "Book",
                "https://example.com/clrs"
            )]))
        );
    }

    #[test]
    fn test_wrong_shapes_are_omitted() {
        let summary = structured(json!({
            "overview": 12,
            "core_concepts": { "unexpected": true },
            "takeaways": ["ok", 3],
            "examples": "Still here."
        }));

        assert!(summary.overview.is_none());
        assert!(summary.core_concepts.is_none());
        assert!(summary.takeaways.is_none());
        assert_eq!(summary.examples, Some(SectionContent::Text("Still here.".into())));
    }

    #[test]
    fn test_single_object_is_wrapped() {
        let summary = structured(json!({
            "questions": { "question": "Why?", "answer": "Because." }
        }));
        assert_eq!(
            summary.questions,
            Some(SectionContent::Questions(vec![QuestionAnswer::new("Why?", "Because.")]))
        );
    }

    #[test]
    fn test_resource_missing_fields() {
        let summary = structured(json!({
            "resources": [{ "url": "https://example.com" }, {}]
        }));
        let Some(SectionContent::Resources(resources)) = summary.resources else {
            panic!("Expected resources");
        };
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title_or_placeholder(), "Untitled");
        assert_eq!(resources[1].url_or_placeholder(), "No URL provided");
    }

    #[test]
    fn test_question_missing_answer() {
        let summary = structured(json!({
            "questions": [{ "question": "Open ended?" }]
        }));
        assert_eq!(
            summary.questions,
            Some(SectionContent::Questions(vec![QuestionAnswer::new("Open ended?", "")]))
        );
    }

    #[test]
    fn test_serde_deserialize_uses_lenient_rules() {
        let record: SummaryRecord =
            serde_json::from_str(r#"{"overview": "Test.", "takeaways": ["A", "B"]}"#).unwrap();
        let SummaryRecord::Structured(summary) = record else {
            panic!("Expected Structured variant");
        };
        assert_eq!(summary.takeaways, Some(SectionContent::list(["A", "B"])));
    }

    #[test]
    fn test_questions_reject_plain_strings() {
        let summary = structured(json!({
            "questions": ["What is X?", "What is Y?"],
            "overview": "Kept."
        }));
        assert!(summary.questions.is_none());
        assert!(summary.overview.is_some());
    }

    #[test]
    fn test_questions_reject_resource_objects() {
        let summary = structured(json!({
            "questions": [{ "title": "Book", "url": "u" }]
        }));
        assert!(summary.questions.is_none());
    }

    #[test]
    fn test_questions_reject_string() {
        let summary = structured(json!({ "questions": "What is X?" }));
        assert!(summary.questions.is_none());
    }

    #[test]
    fn test_resources_reject_strings() {
        let summary = structured(json!({
            "resources": ["https://example.com", "CLRS"]
        }));
        assert!(summary.resources.is_none());

        let summary = structured(json!({ "resources": "https://example.com" }));
        assert!(summary.resources.is_none());
    }

    #[test]
    fn test_resource_object_with_question_keys_gets_placeholders() {
        let summary = structured(json!({
            "resources": [{ "question": "q", "answer": "a" }]
        }));
        assert_eq!(
            summary.resources,
            Some(SectionContent::Resources(vec![ResourceLink::default()]))
        );
    }

    #[test]
    fn test_list_fields_reject_objects() {
        let summary = structured(json!({
            "core_concepts": [{ "question": "q", "answer": "a" }],
            "takeaways": [{ "title": "T", "url": "u" }],
            "examples": { "question": "q" }
        }));
        assert!(summary.core_concepts.is_none());
        assert!(summary.takeaways.is_none());
        assert!(summary.examples.is_none());
    }

    #[test]
    fn test_text_field_accepts_string_list() {
        let summary = structured(json!({
            "overview": ["First line.", "Second line."]
        }));
        assert_eq!(
            summary.overview,
            Some(SectionContent::list(["First line.", "Second line."]))
        );
    }
}
