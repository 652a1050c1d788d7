use std::path::{Path, PathBuf};

use crate::{
    export::{save_pdf, ExportClient},
    layout::{auto_format, sanitize},
    types::{Doc, Error, Layout, TypographySettings},
};

/// # Editor state
///
/// Single owner of the current text and typography. Text is sanitized as it comes in, every
/// render reads an immutable `Doc` snapshot, and a failed export leaves the state as it was.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    content: String,
    settings: TypographySettings,
}

impl Editor {
    pub fn new() -> Self {
        Editor::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn settings(&self) -> &TypographySettings {
        &self.settings
    }

    /// replaces the buffer with typed or pasted text
    pub fn set_content(&mut self, raw: &str) {
        self.content = sanitize(raw);
    }

    pub fn set_settings(&mut self, settings: TypographySettings) {
        self.settings = settings;
    }

    /// italicizes `et al.` citations and restores the default typography
    pub fn auto_format(&mut self) {
        self.content = auto_format(&self.content);
        self.settings = TypographySettings::default();
    }

    /// snapshot handed to renderers and the export backend
    pub fn doc(&self) -> Doc {
        Doc {
            content: self.content.clone(),
            settings: self.settings,
        }
    }

    pub fn layout(&self) -> Layout {
        self.doc().layout()
    }

    pub fn preview_html(&self) -> String {
        self.doc().preview()
    }

    /// sends the snapshot to the export backend and saves the result as `project.pdf` in `dir`
    pub async fn export(&self, client: &ExportClient, dir: &Path) -> Result<PathBuf, Error> {
        let bytes = client.export(&self.doc()).await.inspect_err(|error| {
            tracing::warn!(%error, "export failed");
        })?;

        save_pdf(dir, &bytes).inspect_err(|error| {
            tracing::warn!(%error, dir = %dir.display(), "saving export failed");
        })
    }
}
