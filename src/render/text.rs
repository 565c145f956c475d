//! Plain text renderer — underlined section titles, dashed rules between
//! sections.

use crate::model::{Record, RenderContext};
use crate::render::{base_len, display_path, Renderer};

const DEFAULT_RULE_WIDTH: usize = 78;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, records: &[Record], ctx: &RenderContext) -> String {
        let width = ctx.width.unwrap_or(DEFAULT_RULE_WIDTH);
        let base = base_len(records);
        let mut out: Vec<String> = Vec::new();
        for (i, record) in records.iter().enumerate() {
            let title = format!("$ {} --help", display_path(record, base, ctx));
            let underline = "=".repeat(title.len());
            out.push(title);
            out.push(underline);
            out.push(record.help.trim().to_string());
            if i + 1 < records.len() {
                out.push(format!("\n{}\n", "-".repeat(width)));
            }
        }
        out.join("\n")
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Format;

    fn two_records() -> Vec<Record> {
        vec![
            Record::new(vec!["cli".into()], "Root help text."),
            Record::new(vec!["cli".into(), "cmd".into()], "Cmd help text."),
        ]
    }

    #[test]
    fn one_section_header_per_record() {
        let doc = TextRenderer.render(&two_records(), &RenderContext::new(Format::Text));
        assert_eq!(doc.matches("$ cli --help").count(), 1);
        assert_eq!(doc.matches("$ cli cmd --help").count(), 1);
        assert_eq!(doc.matches("--help\n=").count(), 2);
    }

    #[test]
    fn titles_are_underlined_to_their_length() {
        let doc = TextRenderer.render(&two_records(), &RenderContext::new(Format::Text));
        let title = "$ cli --help";
        assert!(doc.contains(&format!("{}\n{}", title, "=".repeat(title.len()))));
    }

    #[test]
    fn sections_are_separated_by_blank_framed_rule() {
        let doc = TextRenderer.render(&two_records(), &RenderContext::new(Format::Text));
        let rule = format!("\n\n{}\n\n", "-".repeat(78));
        assert_eq!(doc.matches(&rule).count(), 1);
        assert!(doc.contains("Root help text."));
        assert!(doc.contains("Cmd help text."));
    }

    #[test]
    fn width_controls_the_rule() {
        let ctx = RenderContext {
            format: Format::Text,
            width: Some(20),
            prog: None,
        };
        let doc = TextRenderer.render(&two_records(), &ctx);
        assert!(doc.contains(&"-".repeat(20)));
        assert!(!doc.contains(&"-".repeat(21)));
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        let doc = TextRenderer.render(&[], &RenderContext::new(Format::Text));
        assert_eq!(doc, "");
    }
}
