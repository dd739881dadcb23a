//! Axum route handlers for resume uploads.

use axum::extract::multipart::{Field, Multipart};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::{extract_resume, ResumeFormat, ResumeUpload};

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct ResumeExtractResponse {
    pub file_name: Option<String>,
    pub format: ResumeFormat,
    pub char_count: usize,
    pub text: String,
}

/// Reads a resume file field. A field with no bytes counts as no upload,
/// which is what browsers send when the file input is left empty.
pub async fn read_resume_field(field: Field<'_>) -> Result<Option<ResumeUpload>, AppError> {
    let file_name = field
        .file_name()
        .map(str::to_string)
        .filter(|name| !name.is_empty());
    let content_type = field.content_type().map(str::to_string);
    let data = field.bytes().await?;

    if data.is_empty() {
        return Ok(None);
    }

    Ok(Some(ResumeUpload {
        file_name,
        content_type,
        data,
    }))
}

/// POST /api/v1/resumes/extract
///
/// Extracts plain text from an uploaded PDF or DOCX so the client can show
/// what the composer will see.
pub async fn handle_extract_resume(
    mut multipart: Multipart,
) -> Result<Json<ResumeExtractResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(RESUME_FIELD) {
            upload = read_resume_field(field).await?;
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("Please upload your resume".to_string()))?;
    let file_name = upload.file_name.clone();
    let resume = extract_resume(upload).await?;

    Ok(Json(ResumeExtractResponse {
        file_name,
        format: resume.format,
        char_count: resume.text.chars().count(),
        text: resume.text,
    }))
}
