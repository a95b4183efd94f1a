// ABOUTME: Text extraction interface for uploaded medical history documents
// ABOUTME: Plain text is decoded here; binary formats are delegated to external extractors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Largest accepted upload (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// `.txt`, UTF-8
    PlainText,
    /// `.pdf`
    Pdf,
    /// `.docx`
    Docx,
}

impl DocumentFormat {
    /// Format for a file extension, case-insensitive
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim().to_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Format from a file name's extension
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the file has no extension or an unsupported one
    pub fn from_path(path: &Path) -> AppResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                AppError::invalid_format("Only .txt, .pdf and .docx documents are supported")
                    .with_details(json!({ "file": path.display().to_string() }))
            })
    }

    /// Canonical extension
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Converts document bytes into plain text for condition extraction
pub trait DocumentTextExtractor {
    /// Whether this extractor handles the format
    fn supports(&self, format: DocumentFormat) -> bool;

    /// Extract text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for unsupported formats or undecodable content
    fn extract(&self, format: DocumentFormat, bytes: &[u8]) -> AppResult<String>;
}

/// Extractor for UTF-8 text files
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl DocumentTextExtractor for PlainTextExtractor {
    fn supports(&self, format: DocumentFormat) -> bool {
        format == DocumentFormat::PlainText
    }

    fn extract(&self, format: DocumentFormat, bytes: &[u8]) -> AppResult<String> {
        if !self.supports(format) {
            return Err(AppError::new(
                ErrorCode::InvalidFormat,
                format!(
                    "No text extractor available for .{} documents",
                    format.extension()
                ),
            ));
        }
        String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::invalid_format("Document is not valid UTF-8 text").with_source(e))
    }
}

/// Check an upload size against `MAX_UPLOAD_BYTES`
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the upload is larger than the limit
pub fn check_upload_size(len: u64) -> AppResult<()> {
    if len > MAX_UPLOAD_BYTES {
        return Err(AppError::value_out_of_range(format!(
            "Document exceeds the {MAX_UPLOAD_BYTES} byte upload limit"
        ))
        .with_details(json!({ "size_bytes": len })));
    }
    Ok(())
}

/// Read a document from disk and extract its text
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist, and an error when
/// the format is unsupported, the file is too large or unreadable, or
/// extraction fails
pub fn read_document_text(path: &Path, extractor: &dyn DocumentTextExtractor) -> AppResult<String> {
    let format = DocumentFormat::from_path(path)?;
    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(format!("Document {}", path.display())).with_source(e)
        } else {
            AppError::from(e)
        }
    })?;
    check_upload_size(metadata.len())?;

    let bytes = fs::read(path)?;
    let text = extractor.extract(format, &bytes)?;
    debug!(
        document.format = format.extension(),
        document.bytes = bytes.len(),
        "Extracted document text"
    );
    Ok(text)
}
