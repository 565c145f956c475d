//! Heuristic subcommand extraction from captured help text.
//!
//! Two patterns are scanned, both applied, de-duplicated by first occurrence:
//!
//! 1. a brace-delimited choice list (`{a,b,c}`) in the usage block, after
//!    stripping `[...]` optional groups;
//! 2. a `commands:` / `subcommands:` style section, taking the first token of
//!    each entry line.
//!
//! This is inherently approximate: help formats the patterns do not cover
//! yield no children, and an unrelated token can slip through. Neither case
//! is an error.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static RE_OPTIONAL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

static RE_CHOICE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([\w,-]+)\}").unwrap());

static RE_ENTRY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9_-]*)").unwrap());

/// Section headings that introduce a list of subcommands. Matched
/// case-insensitively at column zero.
const SECTION_HEADERS: &[&str] = &[
    "commands:",
    "subcommands:",
    "available commands:",
    "positional arguments:",
];

/// Scan help text for subcommand names, in first-seen order.
pub fn find_subcommands(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    // Pattern 1: choice list in the usage block. Optional groups are removed
    // first so choices of optional arguments cannot masquerade as commands.
    if let Some(block) = usage_block(text) {
        let flat = block.split_whitespace().collect::<Vec<_>>().join(" ");
        let without_optionals = RE_OPTIONAL_GROUP.replace_all(&flat, "");
        if let Some(caps) = RE_CHOICE_GROUP.captures(&without_optionals) {
            for name in caps[1].split(',') {
                let name = name.trim();
                if !name.is_empty() && seen.insert(name.to_string()) {
                    names.push(name.to_string());
                }
            }
        }
    }

    // Pattern 2: a commands section. Track the indentation of entry lines so
    // wrapped description continuations are skipped.
    let mut in_section = false;
    let mut entry_indent: Option<usize> = None;
    for line in text.lines() {
        if is_section_header(line) {
            in_section = true;
            entry_indent = None;
            continue;
        }
        if !in_section {
            continue;
        }
        if line.trim().is_empty() || !line.starts_with(char::is_whitespace) {
            in_section = false;
            continue;
        }

        let trimmed = line.trim_start();
        // argparse repeats the {a,b,c} summary inside the section.
        if trimmed.starts_with('{') {
            continue;
        }
        let indent = line.len() - trimmed.len();
        if entry_indent.is_some_and(|prev| indent > prev) {
            continue;
        }
        if let Some(caps) = RE_ENTRY_TOKEN.captures(trimmed) {
            entry_indent = Some(indent);
            if seen.insert(caps[1].to_string()) {
                names.push(caps[1].to_string());
            }
        }
    }

    names
}

/// The usage block: from a line starting with `usage:` (case-insensitive)
/// down to the first blank line, joined into one string.
fn usage_block(text: &str) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    for line in text.lines() {
        if collected.is_empty() {
            if line.trim_start().to_ascii_lowercase().starts_with("usage:") {
                collected.push(line);
            }
        } else if line.trim().is_empty() {
            break;
        } else {
            collected.push(line);
        }
    }
    if collected.is_empty() {
        None
    } else {
        Some(collected.join(" "))
    }
}

fn is_section_header(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    let lower = line.to_ascii_lowercase();
    SECTION_HEADERS.iter().any(|header| lower.starts_with(header))
}
