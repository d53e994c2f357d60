//! Tests for document, block and diagnostic output

use super::*;
use crate::app::models::{Fact, FactValue, MalformedReason};
use crate::constants::{PROVENANCE_LINES, namespaces, predicates};

#[test]
fn test_prologue_with_provenance() {
    let mut writer = create_buffer_writer();
    writer
        .write_prologue(namespaces::DEFAULTS.iter().copied(), true)
        .unwrap();
    let output = finish_to_string(writer);

    assert!(output.starts_with("@prefix m: <http://learningsparql.com/ns/moma#> .\n"));
    assert!(output.contains("@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n"));
    for line in PROVENANCE_LINES {
        assert!(output.contains(&format!("# {}\n", line)));
    }
    assert!(output.contains("CC0"));
}

#[test]
fn test_prologue_without_provenance() {
    let mut writer = create_buffer_writer();
    writer
        .write_prologue([("ex", "http://example.org/")], false)
        .unwrap();
    assert_eq!(
        finish_to_string(writer),
        "@prefix ex: <http://example.org/> .\n\n"
    );
}

#[test]
fn test_block_layout() {
    let facts = vec![
        Fact::new(predicates::TITLE, FactValue::String("Untitled".to_string())),
        Fact::new(predicates::CURATOR_APPROVED, FactValue::Boolean(true)),
        Fact::new(predicates::HEIGHT_CM, FactValue::Numeric(60.8)),
    ];

    let mut writer = create_buffer_writer();
    writer
        .write_block("http://example.org/artwork/42", &facts)
        .unwrap();
    assert_eq!(writer.blocks_written(), 1);
    assert_eq!(writer.statements_written(), 3);

    assert_eq!(
        finish_to_string(writer),
        "<http://example.org/artwork/42>\n\
         \u{20}    dcterms:title \"Untitled\" ;\n\
         \u{20}    m:curatorApproved true ;\n\
         \u{20}    m:heightCm 60.8 ;\n\
         .\n\n"
    );
}

#[test]
fn test_diagnostic_is_fully_commented() {
    let mut writer = create_buffer_writer();
    writer
        .write_diagnostic(
            7,
            &MalformedReason::NonNumericObjectId("abc".to_string()),
            &["Title with\nnewline", "abc"],
        )
        .unwrap();
    assert_eq!(writer.diagnostics_written(), 1);
    assert_eq!(writer.blocks_written(), 0);

    let output = finish_to_string(writer);
    assert!(output.contains("record 7"));
    assert!(output.contains("ObjectID 'abc' is not numeric"));
    for line in output.lines().filter(|line| !line.is_empty()) {
        assert!(line.starts_with('#'), "uncommented line: {:?}", line);
    }
}

#[test]
fn test_diagnostic_without_fields() {
    let mut writer = create_buffer_writer();
    let no_fields: [&str; 0] = [];
    writer
        .write_diagnostic(
            3,
            &MalformedReason::Unreadable("invalid UTF-8".to_string()),
            &no_fields,
        )
        .unwrap();
    assert_eq!(
        finish_to_string(writer),
        "# Skipped malformed row at record 3 (unreadable record: invalid UTF-8):\n\n"
    );
}

#[test]
fn test_diagnostic_comments_every_line_break() {
    let object_id = "12\nINJECTED x y .";
    let mut writer = create_buffer_writer();
    writer
        .write_diagnostic(
            4,
            &MalformedReason::NonNumericObjectId(object_id.to_string()),
            &["t\rINJECTED", object_id],
        )
        .unwrap();

    let output = finish_to_string(writer);
    let uncommented: Vec<&str> = output
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    assert!(uncommented.is_empty(), "uncommented lines: {:?}", uncommented);
    assert!(!output.contains('\r'));
    assert!(output.contains("# INJECTED x y .' is not numeric):\n"));
}
