//! Structural help source backed by a live clap command tree.
//!
//! Exact and complete: the enumeration reads the declared subcommands in
//! declaration order, and capture is clap's own long-help rendering. The
//! caller's command is never mutated — the walk operates on a clone.

use clap::Command;

use crate::model::Record;
use crate::walk::{walk, HelpSource};

pub struct CommandSource;

impl HelpSource for CommandSource {
    type Node = Command;

    fn capture(&mut self, node: &mut Command) -> String {
        node.render_long_help().to_string()
    }

    fn children(&mut self, node: &Command, _help: &str) -> Vec<(String, Command)> {
        // clap injects a `help` subcommand during build; it has no help text
        // of its own worth a section. With the injection disabled, a `help`
        // subcommand can only be caller-declared and is kept.
        let auto_help = !node.is_disable_help_subcommand_set();
        node.get_subcommands()
            .filter(|sub| !auto_help || sub.get_name() != "help")
            .map(|sub| (sub.get_name().to_string(), sub.clone()))
            .collect()
    }
}

/// Collect one [`Record`] per command in the tree, in pre-order.
///
/// Subcommand aliases do not produce extra records: each subcommand appears
/// once, under its canonical name. Hidden subcommands are included. `prog`
/// renames the cloned root so usage lines and paths show the override.
pub fn collect_from_command(cmd: &Command, prog: Option<&str>) -> Vec<Record> {
    let mut root = cmd.clone();
    if let Some(name) = prog {
        root = root.name(name.to_string()).bin_name(name.to_string());
    }
    // Propagates bin names so nested usage lines show the full path.
    root.build();
    let root_token = root.get_name().to_string();
    walk(&mut CommandSource, root, vec![root_token], None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Command {
        Command::new("app")
            .about("A test CLI")
            .subcommand(Command::new("alpha").about("First command"))
            .subcommand(
                Command::new("beta")
                    .about("Second command")
                    .subcommand(Command::new("gamma").about("Nested command")),
            )
    }

    #[test]
    fn walks_declared_tree_in_preorder() {
        let records = collect_from_command(&sample(), None);
        let paths: Vec<String> = records.iter().map(Record::display_path).collect();
        assert_eq!(paths, vec!["app", "app alpha", "app beta", "app beta gamma"]);
    }

    #[test]
    fn captures_claps_own_help_text() {
        let records = collect_from_command(&sample(), None);
        assert!(records[0].help.contains("A test CLI"));
        assert!(records[1].help.contains("First command"));
        assert!(records[3].help.contains("Nested command"));
    }

    #[test]
    fn auto_help_subcommand_is_excluded() {
        let records = collect_from_command(&sample(), None);
        assert!(records.iter().all(|r| r.path.last().map(String::as_str) != Some("help")));
    }

    #[test]
    fn aliases_yield_a_single_record() {
        let cmd = Command::new("app")
            .subcommand(Command::new("remote").alias("r").about("Manage remotes"));
        let records = collect_from_command(&cmd, None);
        let paths: Vec<String> = records.iter().map(Record::display_path).collect();
        assert_eq!(paths, vec!["app", "app remote"]);
    }

    #[test]
    fn declared_help_subcommand_survives_without_auto_help() {
        let cmd = Command::new("app")
            .disable_help_subcommand(true)
            .subcommand(Command::new("run").about("Run"))
            .subcommand(Command::new("help").about("Caller-defined help"));
        let records = collect_from_command(&cmd, None);
        let paths: Vec<String> = records.iter().map(Record::display_path).collect();
        assert_eq!(paths, vec!["app", "app run", "app help"]);
        assert!(records[2].help.contains("Caller-defined help"));
    }

    #[test]
    fn hidden_subcommands_are_included() {
        let cmd = Command::new("app")
            .subcommand(Command::new("visible"))
            .subcommand(Command::new("secret").hide(true));
        let records = collect_from_command(&cmd, None);
        let paths: Vec<String> = records.iter().map(Record::display_path).collect();
        assert_eq!(paths, vec!["app", "app visible", "app secret"]);
    }

    #[test]
    fn prog_override_leaves_the_original_untouched() {
        let cmd = sample();
        let records = collect_from_command(&cmd, Some("my-app"));
        assert_eq!(records[0].path, vec!["my-app"]);
        assert_eq!(records[1].path, vec!["my-app", "alpha"]);
        assert_eq!(cmd.get_name(), "app");
    }

    #[test]
    fn traversal_is_deterministic() {
        let first = collect_from_command(&sample(), None);
        let second = collect_from_command(&sample(), None);
        assert_eq!(first, second);
    }
}
