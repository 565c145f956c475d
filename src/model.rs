//! Data model for collected help — format-agnostic.

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// One visited node of a command tree: the full invocation path and the help
/// text captured for it.
///
/// `path` starts with the program token(s), e.g. `["git", "remote", "add"]`.
/// Records are emitted in pre-order and no two records of one traversal share
/// a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: Vec<String>,
    /// Verbatim captured help text (or an annotated placeholder when capture
    /// failed for this node).
    pub help: String,
}

impl Record {
    pub fn new(path: Vec<String>, help: impl Into<String>) -> Self {
        Self {
            path,
            help: help.into(),
        }
    }

    /// The path joined with spaces, as shown in section titles.
    pub fn display_path(&self) -> String {
        self.path.join(" ")
    }
}

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Plain text with underlined section titles.
    #[default]
    Text,
    /// Markdown with one heading per command path.
    #[value(alias = "markdown")]
    Md,
    /// Self-contained HTML page with inline styling.
    Html,
}

impl Format {
    pub fn file_extension(&self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Md => "md",
            Format::Html => "html",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "text" | "txt" => Ok(Format::Text),
            "md" | "markdown" => Ok(Format::Md),
            "html" => Ok(Format::Html),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Immutable configuration threaded through document assembly.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub format: Format,
    /// Width of the separator rule in text output. Defaults to 78 columns.
    pub width: Option<usize>,
    /// Override for the root display name in section titles and headings.
    pub prog: Option<String>,
}

impl RenderContext {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}
