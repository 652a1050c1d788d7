//! Client side of the export boundary: one request to the backend, no retries.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use reqwest::header::CONTENT_TYPE;
use tempfile::NamedTempFile;

use crate::types::{Doc, Error};

/// name of the downloaded file
pub const EXPORT_FILE_NAME: &str = "project.pdf";
/// media type the backend answers with
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// HTTP client for the `POST /create-pdf` endpoint
#[derive(Debug, Clone)]
pub struct ExportClient {
    base_url: String,
    client: reqwest::Client,
}

impl ExportClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ExportClient {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/create-pdf", self.base_url.trim_end_matches('/'))
    }

    /// posts `{content, settings}` and returns the PDF body, rejecting any success response that
    /// is not `application/pdf`
    pub async fn export(&self, doc: &Doc) -> Result<Vec<u8>, Error> {
        let endpoint = self.endpoint();
        tracing::info!(%endpoint, bytes = doc.content.len(), "exporting document");

        let response = self.client.post(&endpoint).json(doc).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_pdf(&content_type) {
            return Err(Error::ContentType(content_type));
        }

        let body = response.bytes().await?;
        tracing::info!(bytes = body.len(), "export received");

        Ok(body.to_vec())
    }
}

/// media type check ignoring parameters and case, `application/pdf; charset=binary` passes
fn is_pdf(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
}

/// Writes `bytes` to `dir/project.pdf`.
///
/// The data goes to a temporary file in the same directory first and is renamed into place,
/// so a failure never leaves a partial `project.pdf` behind.
pub fn save_pdf(dir: &Path, bytes: &[u8]) -> Result<PathBuf, Error> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;

    let path = dir.join(EXPORT_FILE_NAME);
    file.persist(&path)?;

    tracing::info!(path = %path.display(), "saved export");
    Ok(path)
}
