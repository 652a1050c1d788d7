use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    layout::{interpret, sanitize},
    traits::Render,
    types::{HtmlPreview, Layout, TypographySettings, Writer},
};

/// # Main entry point of the library
///
/// The body of an export request, `{ "content": ..., "settings": ... }`. A missing or `null`
/// field falls back to empty text and default settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Doc {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: TypographySettings,
}

impl Doc {
    /// sanitizes `content` on the way in
    pub fn new(content: &str, settings: TypographySettings) -> Self {
        Doc {
            content: sanitize(content),
            settings,
        }
    }

    /// content may arrive from any client, so it is sanitized again before interpretation
    pub fn layout(&self) -> Layout {
        interpret(&sanitize(&self.content), &self.settings)
    }

    /// renders the paginated PDF
    pub fn render(&self) -> Vec<u8> {
        let layout = self.layout();
        Writer::new(&layout.settings).render(&layout)
    }

    /// renders the HTML preview from the same layout the PDF uses
    pub fn preview(&self) -> String {
        let layout = self.layout();
        HtmlPreview::new(&layout.settings).render(&layout)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
