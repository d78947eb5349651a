//! Integration tests for PDF export, reading the generated files back with lopdf.

use chrono::{TimeZone, Utc};
use lopdf::content::Content;
use lopdf::Object;
use suma_export::writer::encode_win_ansi;
use suma_export::{
    export, export_json, export_to_file, ExportOptions, Exporter, PageSize, QuestionAnswer,
    ResourceLink, StructuredSummary, SummaryRecord, DEFAULT_FILE_NAME,
};

/// Text strings drawn on each page, in paint order.
fn page_strings(bytes: &[u8]) -> Vec<Vec<Vec<u8>>> {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let data = doc.get_page_content(page_id).unwrap();
            let content = Content::decode(&data).unwrap();
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(bytes.clone()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

fn contains_text(page: &[Vec<u8>], text: &str) -> bool {
    let encoded = encode_win_ansi(text);
    page.iter().any(|s| *s == encoded)
}

fn full_summary() -> StructuredSummary {
    StructuredSummary::new()
        .with_overview("An introduction to sorting algorithms.")
        .with_core_concepts(["Comparison sorts", "Stability", "Big-O"])
        .with_detailed_explanation("Merge sort splits the input in halves. ".repeat(20))
        .with_examples("Sorting a deck of cards by insertion.")
        .with_takeaways(["Merge sort is stable", "Quicksort is fast on average"])
        .with_questions(vec![
            QuestionAnswer::new("What is a stable sort?", "One that keeps equal keys in order."),
            QuestionAnswer::new("Worst case of quicksort?", "O(n^2)."),
        ])
        .with_resources(vec![ResourceLink::new(
            "Sorting visualized",
            "Website",
            "https://example.com/sorting",
        )])
}

#[test]
fn test_example_summary_headers_and_bullets() {
    let bytes = export_json(r#"{"overview": "Test.", "takeaways": ["A", "B"]}"#).unwrap();
    let pages = page_strings(&bytes);
    assert_eq!(pages.len(), 1);

    let page = &pages[0];
    assert!(contains_text(page, "Lecture Summary"));
    assert!(contains_text(page, "Generated by Suma"));
    assert!(contains_text(page, "Overview"));
    assert!(contains_text(page, "Key Takeaways"));
    assert!(contains_text(page, "\u{2022} A"));
    assert!(contains_text(page, "\u{2022} B"));
    assert!(!contains_text(page, "Core Concepts"));
    assert!(contains_text(page, "Page 1 of 1"));
}

#[test]
fn test_bullet_encoded_as_win_ansi() {
    let bytes = export_json(r#"{"takeaways": ["A"]}"#).unwrap();
    let pages = page_strings(&bytes);
    assert!(pages[0].iter().any(|s| s.as_slice() == [0x95, b' ', b'A']));
}

#[test]
fn test_full_summary_section_order() {
    let doc = Exporter::new()
        .layout(&SummaryRecord::Structured(full_summary()))
        .unwrap();
    assert_eq!(
        doc.section_headers(),
        vec![
            "Overview",
            "Core Concepts",
            "Detailed Explanation",
            "Examples",
            "Key Takeaways",
            "Revision Questions",
            "Resources",
        ]
    );

    let lines = doc.body_lines();
    assert!(lines.contains(&"1. Q: What is a stable sort?"));
    assert!(lines.contains(&"   A: One that keeps equal keys in order."));
    assert!(lines.contains(&"1. Sorting visualized (Website)"));
    assert!(lines.contains(&"   https://example.com/sorting"));
}

#[test]
fn test_json_field_order_does_not_matter() {
    let doc = suma_export::layout(
        &SummaryRecord::from_json_str(
            r#"{"resources": [{"title": "T", "type": "Book", "url": "u"}],
                "overview": "O",
                "questions": [{"question": "Q", "answer": "A"}]}"#,
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(
        doc.section_headers(),
        vec!["Overview", "Revision Questions", "Resources"]
    );
}

#[test]
fn test_multi_page_footers_in_pdf() {
    let raw = (1..=150)
        .map(|i| format!("Transcript line {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let bytes = export(&SummaryRecord::raw(raw)).unwrap();
    let pages = page_strings(&bytes);
    let total = pages.len();
    assert_eq!(total, 4);

    for (i, page) in pages.iter().enumerate() {
        let footer = format!("Page {} of {}", i + 1, total);
        assert!(contains_text(page, &footer), "missing '{}'", footer);
    }
    assert!(contains_text(&pages[0], "Lecture Summary"));
    assert!(!contains_text(&pages[1], "Lecture Summary"));
}

#[test]
fn test_uncompressed_and_compressed_agree() {
    let summary = SummaryRecord::Structured(full_summary());
    let compressed = Exporter::new().export(&summary).unwrap();
    let plain = Exporter::new().uncompressed().export(&summary).unwrap();

    assert_eq!(page_strings(&compressed.bytes), page_strings(&plain.bytes));
}

#[test]
fn test_a4_media_box() {
    let exported = Exporter::new()
        .with_page_size(PageSize::A4)
        .export(&SummaryRecord::raw("A4 page"))
        .unwrap();
    let doc = lopdf::Document::load_mem(&exported.bytes).unwrap();
    let pages_id = doc
        .catalog()
        .unwrap()
        .get(b"Pages")
        .and_then(Object::as_reference)
        .unwrap();
    let pages = doc.get_dictionary(pages_id).unwrap();
    let kids = pages.get(b"Kids").and_then(Object::as_array).unwrap();
    let page_id = kids[0].as_reference().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").and_then(Object::as_array).unwrap();
    let height = media_box[3].as_float().unwrap();
    assert!((height - 841.89).abs() < 0.01);
}

fn font_names(bytes: &[u8]) -> Vec<Vec<u8>> {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    let mut names: Vec<Vec<u8>> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| {
            dict.get(b"Type")
                .and_then(Object::as_name)
                .map_or(false, |name| name == b"Font")
        })
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| name.to_vec())
        .collect();
    names.sort();
    names
}

#[test]
fn test_only_drawn_fonts_embedded() {
    let title_only = export(&SummaryRecord::default()).unwrap();
    assert_eq!(
        font_names(&title_only),
        vec![b"Helvetica-Bold".to_vec(), b"Helvetica-Oblique".to_vec()]
    );

    let with_body = export(&SummaryRecord::raw("Body text")).unwrap();
    assert_eq!(
        font_names(&with_body),
        vec![
            b"Helvetica-Bold".to_vec(),
            b"Helvetica-Oblique".to_vec(),
            b"Times-Roman".to_vec(),
        ]
    );
}

#[test]
fn test_info_dictionary() {
    let created = Utc.with_ymd_and_hms(2024, 9, 15, 14, 0, 0).unwrap();
    let options = ExportOptions::new().with_created(created);
    let exported = Exporter::with_options(options)
        .export(&SummaryRecord::default())
        .unwrap();

    let doc = lopdf::Document::load_mem(&exported.bytes).unwrap();
    let info_id = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .unwrap();
    let info = doc.get_dictionary(info_id).unwrap();
    let title = info.get(b"Title").and_then(Object::as_str).unwrap();
    assert_eq!(title, b"Lecture Summary");
    let date = info.get(b"CreationDate").and_then(Object::as_str).unwrap();
    assert_eq!(date, b"D:20240915140000Z");
}

#[test]
fn test_export_to_directory_uses_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_to_file(&SummaryRecord::raw("saved"), dir.path()).unwrap();

    assert_eq!(path, dir.path().join(DEFAULT_FILE_NAME));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_export_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("custom.pdf");
    let path = export_to_file(&SummaryRecord::raw("saved"), &target).unwrap();
    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_concurrent_exports_are_independent() {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let exporter = Exporter::with_options(ExportOptions::new().with_created(created));
    let summary = SummaryRecord::Structured(full_summary());

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| exporter.export(&summary).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected = suma_export::writer::to_json(
        &results[0].document,
        suma_export::JsonFormat::Compact,
    )
    .unwrap();
    for exported in &results[1..] {
        let json =
            suma_export::writer::to_json(&exported.document, suma_export::JsonFormat::Compact)
                .unwrap();
        assert_eq!(json, expected);
        assert_eq!(exported.page_count(), results[0].page_count());
    }
}

#[cfg(feature = "async")]
#[test]
fn test_export_to_file_async() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let path = runtime
        .block_on(suma_export::export_to_file_async(
            &SummaryRecord::raw("async"),
            dir.path(),
        ))
        .unwrap();
    assert!(path.ends_with(DEFAULT_FILE_NAME));
    assert!(path.exists());
}
