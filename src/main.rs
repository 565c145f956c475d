//! totalhelp CLI — document an external command by recursively calling its
//! `--help` flag.

use anyhow::Result;
use clap::Parser;

use totalhelp::{full_help_external, print_output, ExternalOptions, Format, RenderContext};

#[derive(Parser)]
#[command(
    name = "totalhelp",
    version,
    about = "Generate monolithic help for a command by recursively calling its --help flag"
)]
struct Cli {
    /// The command to inspect, with any leading arguments
    /// (e.g. `pip` or `python -m pip`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    command: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Open the generated help in a web browser (html format only)
    #[arg(long)]
    open: bool,

    /// Timeout in seconds for each --help invocation
    #[arg(long, default_value_t = 5.0)]
    timeout: f64,

    /// Maximum recursion depth for subcommand discovery
    #[arg(long, default_value_t = 4)]
    max_depth: usize,

    /// Width of the separator rule in text output
    #[arg(long)]
    width: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let ctx = RenderContext {
        format: cli.format,
        width: cli.width,
        prog: None,
    };
    let options = ExternalOptions {
        timeout: cli.timeout,
        max_depth: cli.max_depth,
        env: None,
    };

    let doc = full_help_external(&cli.command, &ctx, &options)?;
    print_output(&doc, cli.format, cli.open);
    Ok(())
}
