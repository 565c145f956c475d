//! Document assembly — trait-based format dispatch.
//!
//! Assembly is a pure function of the record sequence and the render context:
//! no I/O, no timestamps, byte-identical output for identical input.

pub mod html;
pub mod markdown;
pub mod text;

use crate::model::{Format, Record, RenderContext};

/// Trait for rendering a record sequence into one output document.
pub trait Renderer {
    fn render(&self, records: &[Record], ctx: &RenderContext) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format.
pub fn create_renderer(format: Format) -> Box<dyn Renderer> {
    match format {
        Format::Text => Box::new(text::TextRenderer),
        Format::Md => Box::new(markdown::MarkdownRenderer),
        Format::Html => Box::new(html::HtmlRenderer),
    }
}

/// Assemble the document for `ctx.format`. Total: any record sequence,
/// including an empty one, yields a valid document.
pub fn assemble(records: &[Record], ctx: &RenderContext) -> String {
    create_renderer(ctx.format).render(records, ctx)
}

/// Number of tokens in the root invocation; section depth is measured
/// relative to it.
pub(crate) fn base_len(records: &[Record]) -> usize {
    records.first().map_or(0, |record| record.path.len())
}

/// Path as displayed in titles, with the root token(s) optionally replaced by
/// the `prog` override.
pub(crate) fn display_path(record: &Record, base: usize, ctx: &RenderContext) -> String {
    match &ctx.prog {
        Some(prog) => {
            let mut parts = vec![prog.clone()];
            parts.extend(record.path.iter().skip(base).cloned());
            parts.join(" ")
        }
        None => record.path.join(" "),
    }
}

/// Display name of the root command, for document titles.
pub(crate) fn root_label(records: &[Record], ctx: &RenderContext) -> String {
    ctx.prog
        .clone()
        .or_else(|| records.first().map(|record| record.path.join(" ")))
        .unwrap_or_default()
}
