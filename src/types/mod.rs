mod directive;
mod doc;
mod editor;
mod error;
mod font;
mod font_family;
mod font_reference;
mod font_style;
mod page;
mod preview;
mod settings;
mod text;
mod writer;

pub use directive::{Emphasis, Layout, LayoutDirective, Span, TextAlignment, TextLine, Weight};
pub use doc::Doc;
pub use editor::Editor;
pub use error::{Error, EXPORT_FAILURE_NOTICE};
pub use font::{Helvetica, Times};
pub use font_family::FontFamily;
pub use font_reference::FontReference;
pub use font_style::FontVariant;
pub use page::{Page, PageContent};
pub use preview::HtmlPreview;
pub use settings::{LineSpacing, TypographySettings, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use text::{lines, Line};
pub use writer::{Writer, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH};
