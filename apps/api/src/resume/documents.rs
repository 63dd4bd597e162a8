//! Upstream document text extraction for uploaded resumes.
//!
//! Sits outside the extraction core: the extractor only ever sees the string
//! produced here. Blank lines are preserved because section segmentation
//! depends on them.

use thiserror::Error;
use tracing::{info, warn};

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt"];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type '{0}'. Allowed: pdf, docx, doc, txt")]
    UnsupportedType(String),

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("File is not valid UTF-8 text")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Lowercased extension of an uploaded filename, if it is one we accept.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Decodes an uploaded document into plain text based on its extension.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, DocumentError> {
    let ext = allowed_extension(filename)
        .ok_or_else(|| DocumentError::UnsupportedType(filename.to_string()))?;

    info!("Extracting text from {filename} (type: {ext})");

    let text = match ext.as_str() {
        "txt" => String::from_utf8(data.to_vec())?,
        "pdf" => pdf_extract::extract_text_from_mem(data).map_err(|e| {
            warn!("PDF extraction failed: {e}");
            DocumentError::Pdf(e.to_string())
        })?,
        // Legacy .doc goes through the DOCX reader; most real .doc files fail here.
        "docx" | "doc" => extract_docx(data)?,
        other => return Err(DocumentError::UnsupportedType(other.to_string())),
    };

    info!("Extracted {} characters from {filename}", text.len());
    Ok(text)
}

fn extract_docx(data: &[u8]) -> Result<String, DocumentError> {
    let docx = docx_rs::read_docx(data).map_err(|e| {
        warn!("DOCX extraction failed: {e}");
        DocumentError::Docx(e.to_string())
    })?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    docx_rs::ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                docx_rs::RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();
            // Empty paragraphs stay as blank lines.
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extension_is_case_insensitive() {
        assert_eq!(allowed_extension("CV.PDF").as_deref(), Some("pdf"));
        assert_eq!(allowed_extension("resume.docx").as_deref(), Some("docx"));
        assert_eq!(allowed_extension("notes.md"), None);
        assert_eq!(allowed_extension("no_extension"), None);
    }

    #[test]
    fn test_plain_text_keeps_blank_lines() {
        let text = extract_text("resume.txt", b"Skills\nRust\n\nEducation").unwrap();
        assert_eq!(text, "Skills\nRust\n\nEducation");
    }

    #[test]
    fn test_unsupported_type_rejected() {
        let err = extract_text("resume.exe", b"MZ").unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedType(_)));
    }

    #[test]
    fn test_invalid_utf8_text_rejected() {
        let err = extract_text("resume.txt", &[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, DocumentError::Encoding(_)));
    }

    #[test]
    fn test_garbage_pdf_rejected() {
        let err = extract_text("resume.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, DocumentError::Pdf(_)));
    }

    #[test]
    fn test_garbage_docx_rejected() {
        let err = extract_text("resume.doc", b"not a zip").unwrap_err();
        assert!(matches!(err, DocumentError::Docx(_)));
    }
}
