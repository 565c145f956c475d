//! HTML renderer — one self-contained page with inline styling.
//!
//! No external resource references and no scripts, so the file is viewable
//! standalone from disk.

use crate::model::{Record, RenderContext};
use crate::render::{base_len, display_path, root_label, Renderer};

const MAX_HEADING_DEPTH: usize = 6;

const CSS: &str = "\
body { font-family: system-ui, sans-serif; line-height: 1.6; margin: 0; background-color: #f8f9fa; color: #212529; }
.container { max-width: 800px; margin: 2rem auto; padding: 2rem; background-color: #fff; border-radius: 8px; box-shadow: 0 4px 8px rgba(0,0,0,0.05); }
h1, h2, h3, h4, h5, h6 { margin-top: 2rem; margin-bottom: 1rem; color: #343a40; border-bottom: 1px solid #dee2e6; padding-bottom: 0.5rem; }
pre { background-color: #e9ecef; padding: 1rem; border-radius: 5px; white-space: pre-wrap; word-wrap: break-word; font-family: ui-monospace, monospace; }
code { font-family: ui-monospace, monospace; font-size: 0.9em; }
.command code { color: #d6336c; }
nav { padding: 1rem; background: #343a40; color: white; margin-bottom: 2rem; border-radius: 8px; }
nav h1, nav h2 { border: none; color: white; margin: 0 0 0.5rem 0; }
nav ul { list-style: none; padding: 0; margin: 0; }
nav a { color: #adb5bd; text-decoration: none; }
nav a:hover { color: white; }
";

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, records: &[Record], ctx: &RenderContext) -> String {
        let base = base_len(records);
        let label = html_escape(&root_label(records, ctx));

        let mut toc = String::from("<ul>");
        let mut body = String::new();
        for record in records {
            let depth = record.path.len().saturating_sub(base);
            let path_str = display_path(record, base, ctx);
            let anchor = anchor_for(&record.path[base..]);

            toc.push_str(&format!(
                "<li style=\"margin-left: {}px;\"><a href=\"#{}\">{}</a></li>",
                depth * 20,
                anchor,
                html_escape(&path_str)
            ));

            let level = (depth + 2).min(MAX_HEADING_DEPTH);
            body.push_str(&format!(
                "<h{level} id=\"{}\" class=\"command\"><code>{} --help</code></h{level}>\n",
                anchor,
                html_escape(&path_str)
            ));
            body.push_str(&format!("<pre>{}</pre>\n", html_escape(record.help.trim())));
        }
        toc.push_str("</ul>");

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        out.push_str(&format!("<title>Help for {label}</title>\n"));
        out.push_str(&format!("<style>\n{CSS}</style>\n"));
        out.push_str("</head>\n<body>\n<div class=\"container\">\n");
        out.push_str("<nav>\n");
        out.push_str(&format!("<h1>Help for <code>{label}</code></h1>\n"));
        out.push_str("<h2>Contents</h2>\n");
        out.push_str(&toc);
        out.push_str("\n</nav>\n<main>\n");
        out.push_str(&body);
        out.push_str("</main>\n</div>\n</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// Anchor id for a command path below the root. Hyphens inside tokens are
/// doubled before joining with a single hyphen, so `["a-b"]` and `["a", "b"]`
/// cannot collide.
fn anchor_for(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return "cmd-root".to_string();
    }
    let escaped: Vec<String> = tokens.iter().map(|t| t.replace('-', "--")).collect();
    format!("cmd-{}", escaped.join("-"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
