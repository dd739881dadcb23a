//! Resume text extraction: turns an uploaded PDF or DOCX into plain text.
//!
//! Format is decided from the declared content type first, then the file
//! extension. Anything else is rejected with `ResumeError::UnsupportedFormat`;
//! an upload never silently yields empty text.

pub mod handlers;

use std::io::{Cursor, Read};

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Main body part of a WordprocessingML package.
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

/// Largest inflated `word/document.xml` accepted. The upload limit only
/// bounds the compressed size.
pub const MAX_DOCX_XML_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Unsupported file format ({0}). Please upload PDF or DOCX.")]
    UnsupportedFormat(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Could not extract text from your resume. Please check the file.")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

/// A resume file as received from the client.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Plain text extracted from a resume. Lives for one request only.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeText {
    pub format: ResumeFormat,
    pub text: String,
}

/// Decides the document format from the declared MIME type, falling back to
/// the file extension when the client sent a generic or missing type.
pub fn detect_format(
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<ResumeFormat, ResumeError> {
    let mime = content_type
        .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty());

    match mime.as_deref() {
        Some(PDF_MIME) => return Ok(ResumeFormat::Pdf),
        Some(DOCX_MIME) => return Ok(ResumeFormat::Docx),
        _ => {}
    }

    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => Ok(ResumeFormat::Pdf),
        Some("docx") => Ok(ResumeFormat::Docx),
        _ => Err(ResumeError::UnsupportedFormat(
            mime.or_else(|| file_name.map(str::to_string))
                .unwrap_or_else(|| "unknown".to_string()),
        )),
    }
}

/// Extracts text from an upload. Parsing runs on the blocking pool; a
/// panicking parser is reported as a read failure for that format.
pub async fn extract_resume(upload: ResumeUpload) -> Result<ResumeText, ResumeError> {
    let format = detect_format(upload.content_type.as_deref(), upload.file_name.as_deref())?;
    let data = upload.data;

    let text = tokio::task::spawn_blocking(move || extract_text(&data, format))
        .await
        .map_err(|e| match format {
            ResumeFormat::Pdf => ResumeError::Pdf(format!("parser aborted: {e}")),
            ResumeFormat::Docx => ResumeError::Docx(format!("parser aborted: {e}")),
        })??;

    info!("Extracted {} chars of resume text from {:?}", text.chars().count(), format);
    Ok(ResumeText { format, text })
}

/// Synchronous extraction for a known format. Returns `ResumeError::Empty`
/// when the document holds no text.
pub fn extract_text(data: &[u8], format: ResumeFormat) -> Result<String, ResumeError> {
    let text = match format {
        ResumeFormat::Pdf => extract_pdf_text(data)?,
        ResumeFormat::Docx => extract_docx_text(data)?,
    };

    if text.trim().is_empty() {
        return Err(ResumeError::Empty);
    }
    Ok(text)
}

fn extract_pdf_text(data: &[u8]) -> Result<String, ResumeError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ResumeError::Pdf(e.to_string()))
}

fn extract_docx_text(data: &[u8]) -> Result<String, ResumeError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).map_err(|e| ResumeError::Docx(e.to_string()))?;

    let mut part = archive
        .by_name(DOCX_DOCUMENT_PART)
        .map_err(|e| ResumeError::Docx(format!("{DOCX_DOCUMENT_PART}: {e}")))?;
    if part.size() > MAX_DOCX_XML_BYTES {
        return Err(docx_too_large());
    }

    // The declared size can lie; cap the actual inflate as well.
    let mut raw = Vec::new();
    part.by_ref()
        .take(MAX_DOCX_XML_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ResumeError::Docx(e.to_string()))?;
    if raw.len() as u64 > MAX_DOCX_XML_BYTES {
        return Err(docx_too_large());
    }
    let xml = String::from_utf8(raw).map_err(|e| ResumeError::Docx(e.to_string()))?;

    docx_paragraphs(&xml).map(|paragraphs| paragraphs.join("\n"))
}

fn docx_too_large() -> ResumeError {
    ResumeError::Docx(format!(
        "document body exceeds {} MiB when uncompressed",
        MAX_DOCX_XML_BYTES / (1024 * 1024)
    ))
}

/// Collects the text of each `<w:p>` paragraph in document order.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ResumeError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t.unescape().map_err(|e| ResumeError::Docx(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ResumeError::Docx(format!(
                    "malformed XML at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            Ok(_) => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs)
}
