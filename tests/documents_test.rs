// ABOUTME: Tests for medical document text extraction
// ABOUTME: Covers supported formats, upload limits, and unsupported extensions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_planner::documents::{
    check_upload_size, read_document_text, DocumentFormat, DocumentTextExtractor,
    PlainTextExtractor, MAX_UPLOAD_BYTES,
};
use fitai_planner::constants::health::labels;
use fitai_planner::errors::ErrorCode;
use fitai_planner::intelligence::detect_health_conditions;
use std::path::Path;
use tempfile::TempDir;

mod common;

#[test]
fn test_format_detection() {
    assert_eq!(
        DocumentFormat::from_path(Path::new("history.TXT")).unwrap(),
        DocumentFormat::PlainText
    );
    assert_eq!(
        DocumentFormat::from_path(Path::new("scan.pdf")).unwrap(),
        DocumentFormat::Pdf
    );
    let err = DocumentFormat::from_path(Path::new("notes.rtf")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(DocumentFormat::from_path(Path::new("no_extension")).is_err());
}

#[test]
fn test_plain_text_document_feeds_condition_extraction() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.txt");
    std::fs::write(&path, "Patient reports asthma and high blood pressure.").unwrap();

    let text = read_document_text(&path, &PlainTextExtractor).unwrap();
    let conditions = detect_health_conditions(Some(&text));
    assert_eq!(
        conditions.iter().collect::<Vec<_>>(),
        [labels::HIGH_BLOOD_PRESSURE, labels::ASTHMA]
    );
}

#[test]
fn test_binary_formats_need_a_capable_extractor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scan.pdf");
    std::fs::write(&path, b"%PDF-1.7").unwrap();

    assert!(!PlainTextExtractor.supports(DocumentFormat::Pdf));
    let err = read_document_text(&path, &PlainTextExtractor).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let err = PlainTextExtractor
        .extract(DocumentFormat::PlainText, &[0xff, 0xfe, 0x00])
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_document_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_document_text(&dir.path().join("absent.txt"), &PlainTextExtractor).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.http_status(), 404);
}

#[test]
fn test_upload_limit() {
    assert!(check_upload_size(MAX_UPLOAD_BYTES).is_ok());
    let err = check_upload_size(MAX_UPLOAD_BYTES + 1).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}
