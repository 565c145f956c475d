//! totalhelp — collect the `--help` of a command and every nested subcommand
//! into one document.
//!
//! Two acquisition strategies feed one walker and one assembler:
//!
//! - [`full_help_from_command`] walks a [`clap::Command`] tree the caller
//!   owns. Exact: every declared subcommand, in declaration order.
//! - [`full_help_external`] walks an unowned executable by invoking
//!   `<command> --help` recursively and scanning the output for subcommand
//!   names. Best-effort: unrecognized help formats yield no children, and a
//!   broken branch is annotated in place instead of failing the document.
//!
//! ```no_run
//! use totalhelp::{full_help_from_command, Format, RenderContext};
//!
//! let cmd = clap::Command::new("app")
//!     .subcommand(clap::Command::new("run").about("Run the thing"));
//! let doc = full_help_from_command(&cmd, &RenderContext::new(Format::Md));
//! println!("{doc}");
//! ```

pub mod error;
pub mod flag;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;
pub mod source;
pub mod walk;

pub use error::Error;
pub use flag::{add_totalhelp_flag, handle_totalhelp};
pub use model::{Format, Record, RenderContext};
pub use output::print_output;
pub use render::{assemble, create_renderer, Renderer};
pub use source::external::{ExternalOptions, ProcessSource};
pub use source::structural::{collect_from_command, CommandSource};
pub use walk::{walk, HelpSource};

/// Render a monolithic help document for a clap command and all of its
/// subcommands. The caller's command is never mutated; the walk operates on a
/// clone, renamed to `ctx.prog` when set.
pub fn full_help_from_command(cmd: &clap::Command, ctx: &RenderContext) -> String {
    let records = source::structural::collect_from_command(cmd, ctx.prog.as_deref());
    render::assemble(&records, ctx)
}

/// Best-effort help document for an external command, discovered by
/// recursively invoking `<command> --help`.
///
/// Fails only on caller misuse (empty command, invalid timeout), and before
/// any traversal begins; per-node failures are annotated inline in the
/// document.
pub fn full_help_external(
    command: &[String],
    ctx: &RenderContext,
    options: &ExternalOptions,
) -> Result<String, Error> {
    if command.is_empty() {
        return Err(Error::EmptyCommand);
    }
    if !options.timeout.is_finite() || options.timeout < 0.0 {
        return Err(Error::InvalidTimeout(options.timeout));
    }

    let mut source = ProcessSource::new(options);
    let records = walk::walk(
        &mut source,
        command.to_vec(),
        command.to_vec(),
        Some(options.max_depth),
    );
    Ok(render::assemble(&records, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_a_configuration_error() {
        let err = full_help_external(&[], &RenderContext::default(), &ExternalOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyCommand));
    }

    #[test]
    fn negative_timeout_is_a_configuration_error() {
        let options = ExternalOptions {
            timeout: -1.0,
            ..ExternalOptions::default()
        };
        let err = full_help_external(
            &["ls".to_string()],
            &RenderContext::default(),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidTimeout(_)));
    }

    #[test]
    fn dead_target_still_renders_a_document() {
        let command = vec!["/no/such/program/anywhere".to_string()];
        let doc = full_help_external(
            &command,
            &RenderContext::default(),
            &ExternalOptions::default(),
        )
        .unwrap();
        assert!(doc.contains("$ /no/such/program/anywhere --help"));
        assert!(doc.contains("command not found"));
    }
}
