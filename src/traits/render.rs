use crate::types::{Layout, LayoutDirective, TextLine};

/// A render target fed one directive at a time.
///
/// Implementors only map each directive onto their own drawing primitive. Heading, span and
/// page break rules are decided once by the layout interpreter, so targets cannot diverge.
pub trait Render: Sized {
    type Output;

    fn blank(&mut self);
    fn page_break(&mut self);
    fn text_line(&mut self, line: &TextLine);
    fn finish(self) -> Self::Output;

    fn render(mut self, layout: &Layout) -> Self::Output {
        for directive in &layout.directives {
            match directive {
                LayoutDirective::Blank => self.blank(),
                LayoutDirective::PageBreak => self.page_break(),
                LayoutDirective::TextLine(line) => self.text_line(line),
            }
        }

        self.finish()
    }
}
