//! Opt-in `--totalhelp` wiring for a caller's own clap command.

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::model::{Format, RenderContext};
use crate::{full_help_from_command, output};

const HELP_HEADING: &str = "Total help options";

/// Attach a `--totalhelp` flag (alias `--superhelp`) and, optionally,
/// `--format` and `--open` companions. Call after all subcommands have been
/// added. The argument ids are `totalhelp`, `format` and `open`; skip the
/// companions if your command already defines those.
pub fn add_totalhelp_flag(cmd: Command, add_format_option: bool, add_open_option: bool) -> Command {
    let mut cmd = cmd.arg(
        Arg::new("totalhelp")
            .long("totalhelp")
            .alias("superhelp")
            .action(ArgAction::SetTrue)
            .help("Show a monolithic help document for all commands and exit")
            .help_heading(HELP_HEADING),
    );
    if add_format_option {
        cmd = cmd.arg(
            Arg::new("format")
                .long("format")
                .value_parser(clap::value_parser!(Format))
                .default_value("text")
                .help("The output format for --totalhelp")
                .help_heading(HELP_HEADING),
        );
    }
    if add_open_option {
        cmd = cmd.arg(
            Arg::new("open")
                .long("open")
                .action(ArgAction::SetTrue)
                .help("Open the generated help in a web browser (html format only)")
                .help_heading(HELP_HEADING),
        );
    }
    cmd
}

/// Render and deliver the full help document when `--totalhelp` was given.
/// Returns whether the flag was set, so the caller can exit early. `cmd` must
/// be the same command the matches were parsed from.
pub fn handle_totalhelp(matches: &ArgMatches, cmd: &Command) -> bool {
    if !matches.get_flag("totalhelp") {
        return false;
    }
    let format = matches
        .try_get_one::<Format>("format")
        .ok()
        .flatten()
        .copied()
        .unwrap_or_default();
    let open = matches
        .try_get_one::<bool>("open")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);

    let doc = full_help_from_command(cmd, &RenderContext::new(format));
    output::print_output(&doc, format, open);
    true
}
