//! # Introduction
//!
//! iDraft turns plain drafted text into a paginated A4 PDF. The writer types or pastes text,
//! marks `_italic_` and `*bold*` runs, starts chapters with a `CHAPTER ...` line (or a
//! `REFERENCES` line), picks a font family, size and line spacing, previews the result and
//! exports it. Built on top of pdf_writer (Typst), using the Standard-14 Times and Helvetica
//! families, so no fonts are embedded.
//!
//! The pipeline:
//! - `layout::sanitize` reduces pasted text to printable ASCII plus newlines
//! - `layout::interpret` turns sanitized text into a `Layout`: blank lines, page breaks and
//!   styled text lines
//! - renderers implementing `traits::Render` consume that one layout, `types::Writer` for the
//!   PDF and `types::HtmlPreview` for the screen, so preview and export always agree
//!
//! Feature Road Map:
//! - [X] Times and Helvetica families (regular, bold, italic, bold-italic)
//! - [X] Chapter and references headings, centered and bold, each on a new page
//! - [X] Inline italic and bold markers
//! - [X] Font size and line spacing
//! - [X] "et al." auto-format
//! - [X] Export backend (`POST /create-pdf`)
//! - [ ] Line wrapping by font metrics
//! - [ ] Page numbers
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! The main entry point is the `Doc` struct, also the JSON body of an export request. `.render()`
//! returns the PDF bytes and `.preview()` the HTML preview.
//!
//! ### Simple render
//! ```
//! use idraft::types::{Doc, TypographySettings};
//!
//! let doc = Doc::new("CHAPTER 1\nIt was a _dark_ night.", TypographySettings::default());
//! let pdf_file = doc.render();
//!
//! assert!(pdf_file.starts_with(b"%PDF-"));
//! ```

pub mod export;
pub mod layout;
pub mod server;
pub mod traits;
pub mod types;

pub use layout::{interpret, sanitize};
pub use types::{Doc, Editor, Error, Layout, LayoutDirective, TypographySettings};

/// installs the `tracing` subscriber used by the binaries, `RUST_LOG` overrides `default_filter`
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
