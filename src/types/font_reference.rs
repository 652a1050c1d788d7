use pdf_writer::{Name, Ref};

use crate::types::FontVariant;

/// a Type1 font registered with the document, also used as its resource name
#[derive(Debug, Clone, Copy)]
pub struct FontReference {
    pub id: Ref,
    pub variant: FontVariant,
    pub name: Name<'static>,
}
