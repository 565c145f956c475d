//! Markdown renderer — one heading per command path, help text in fenced
//! blocks so whitespace survives.

use crate::model::{Record, RenderContext};
use crate::render::{base_len, display_path, root_label, Renderer};

/// Markdown (and HTML) headings do not go deeper than this.
const MAX_HEADING_DEPTH: usize = 6;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[Record], ctx: &RenderContext) -> String {
        let base = base_len(records);
        let mut out: Vec<String> = vec![format!("# Help for `{}`\n", root_label(records, ctx))];
        for record in records {
            let depth = record.path.len().saturating_sub(base);
            let level = (depth + 2).min(MAX_HEADING_DEPTH);
            out.push(format!(
                "{} `{}`\n",
                "#".repeat(level),
                display_path(record, base, ctx)
            ));
            out.push("```text".to_string());
            out.push(record.help.trim().to_string());
            out.push("```\n".to_string());
        }
        out.join("\n")
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
