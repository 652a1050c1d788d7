use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::{
    traits::Render,
    types::{
        FontFamily, FontReference, FontVariant, Page, PageContent, TextAlignment, TextLine,
        TypographySettings,
    },
};

/// A4 in points
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
/// uniform margin on all four sides
pub const PAGE_MARGIN: f32 = 72.0;

/// the PDF rendering engine
/// contains
/// - page references
/// - ref allocator
/// - the four font variants of the selected family
/// - page geometry and the write head position
pub struct Writer {
    pub x: f32,
    pub y: f32,
    pub alloc: Ref,
    pub page_tree_id: Ref,
    pub font_family: FontFamily,
    pub font_refs: Vec<FontReference>,
    pub font_size: f32,
    pub line_height: f32,
    pub pages: Vec<Page>,
    pub page_height: f32,
    pub page_width: f32,
    pub page_margin: f32,
}

impl Writer {
    /// Allocates the page tree and font references and opens the first page with the write head
    /// at the top margin
    pub fn new(settings: &TypographySettings) -> Self {
        let mut alloc = Ref::new(1);
        let page_tree_id = alloc.bump();
        let font_family = settings.font_family;

        let font_refs = FontVariant::ALL
            .into_iter()
            .map(|variant| FontReference {
                id: alloc.bump(),
                variant,
                name: Name(font_family.base_font(variant).as_bytes()),
            })
            .collect();

        let mut writer = Writer {
            x: PAGE_MARGIN,
            y: PAGE_HEIGHT - PAGE_MARGIN,
            alloc,
            page_tree_id,
            font_family,
            font_refs,
            font_size: settings.font_size_pt(),
            line_height: settings.line_height(),
            pages: Vec::with_capacity(1),
            page_height: PAGE_HEIGHT,
            page_width: PAGE_WIDTH,
            page_margin: PAGE_MARGIN,
        };

        writer.build_new_page();
        writer
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the writer down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    /// moves the writer to a new position
    pub fn go_to(&mut self, num_x: f32, num_y: f32) {
        self.x = num_x;
        self.y = num_y;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn writeable_area(&self) -> f32 {
        self.page_width - (self.page_margin * 2.0)
    }

    fn font_ref(&self, variant: FontVariant) -> Option<&FontReference> {
        self.font_refs.iter().find(|font| font.variant == variant)
    }

    /// calculates the offset required to center a line
    fn offset_center(phrase_width: f32, writeable_area: f32) -> f32 {
        if phrase_width < writeable_area {
            (writeable_area - phrase_width) / 2.0
        } else {
            0.0
        }
    }

    /// width of a line in points, each span measured in its resolved variant
    pub fn line_width(&self, line: &TextLine) -> f32 {
        let metrics = self.font_family.metrics();

        line.spans
            .iter()
            .map(|span| {
                let variant = FontVariant::resolve(line.weight, span.emphasis);
                metrics.text_width(&span.text, variant, self.font_size)
            })
            .sum()
    }

    pub fn build_new_page(&mut self) {
        let page_id = self.bump();
        let content_id = self.bump();

        self.pages.push(Page {
            page_id,
            contents: PageContent {
                content_id,
                content: Content::new(),
            },
        });

        let (x, y) = (self.page_margin, self.page_height - self.page_margin);
        self.go_to(x, y);

        tracing::debug!(page = self.pages.len(), "started page");
    }
}

impl Render for Writer {
    type Output = Vec<u8>;

    fn blank(&mut self) {
        self.feed(self.line_height);
    }

    fn page_break(&mut self) {
        self.build_new_page();
    }

    /// draws one line, opening a new page first when the line box would cross the bottom margin
    fn text_line(&mut self, line: &TextLine) {
        if self.y - self.line_height < self.page_margin {
            self.build_new_page();
        }

        let offset = match line.alignment {
            TextAlignment::Left => 0.0,
            TextAlignment::Center => {
                Writer::offset_center(self.line_width(line), self.writeable_area())
            }
        };

        self.x = self.page_margin + offset;
        let baseline = self.y - self.font_size;

        debug_assert!(self.x >= self.page_margin);
        debug_assert!(baseline >= self.page_margin);

        let runs: Vec<(Name<'static>, &str)> = line
            .spans
            .iter()
            .filter_map(|span| {
                let variant = FontVariant::resolve(line.weight, span.emphasis);
                self.font_ref(variant).map(|font| (font.name, span.text.as_str()))
            })
            .collect();

        let (x, font_size) = (self.x, self.font_size);

        if let Some(page) = self.pages.last_mut() {
            let target = &mut page.contents.content;

            target.begin_text();
            target.next_line(x, baseline);

            for (name, text) in runs {
                target.set_font(name, font_size);
                target.show(Str(text.as_bytes()));
            }

            target.end_text();
        }

        self.feed(self.line_height);
    }

    /// registers fonts, writes every page and the document catalog, returns the finished PDF
    fn finish(mut self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let catalog_id = self.bump();
        let info_id = self.bump();

        for font in self.font_refs.iter() {
            pdf.type1_font(font.id)
                .base_font(font.name)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let page_ids: Vec<Ref> = self.pages.iter().map(|page| page.page_id).collect();

        for page in self.pages.drain(..) {
            {
                let mut pdf_page = pdf.page(page.page_id);

                pdf_page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height));
                pdf_page.parent(self.page_tree_id);
                pdf_page.contents(page.contents.content_id);

                let mut resources = pdf_page.resources();
                let mut fonts = resources.fonts();

                for font in self.font_refs.iter() {
                    fonts.pair(font.name, font.id);
                }
            }

            pdf.stream(page.contents.content_id, &page.contents.content.finish());
        }

        pdf.pages(self.page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        pdf.catalog(catalog_id).pages(self.page_tree_id);

        pdf.document_info(info_id)
            .title(TextStr("project"))
            .producer(TextStr("idraft"))
            .creation_date(creation_date());

        tracing::debug!(pages = page_ids.len(), "finished pdf");

        pdf.finish()
    }
}

fn creation_date() -> Date {
    let now = Utc::now();

    Date::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(0)
}
