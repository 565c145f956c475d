//! External help source — re-invokes the target executable with `--help`.
//!
//! Best-effort by design: the target is an unowned program, so children are
//! discovered by scanning its help text (see [`crate::parser`]) and every
//! per-node failure (missing binary, timeout, non-zero exit) is folded into
//! the captured text instead of aborting the walk.

use std::collections::HashMap;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::parser;
use crate::walk::HelpSource;

const DEFAULT_TIMEOUT_SECS: f64 = 5.0;
const DEFAULT_MAX_DEPTH: usize = 4;

/// Knobs for external discovery.
#[derive(Debug, Clone)]
pub struct ExternalOptions {
    /// Per-invocation timeout in seconds.
    pub timeout: f64,
    /// Maximum subcommand depth below the root command.
    pub max_depth: usize,
    /// Environment for the target process; `None` inherits the current one.
    pub env: Option<HashMap<String, String>>,
}

impl Default for ExternalOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            max_depth: DEFAULT_MAX_DEPTH,
            env: None,
        }
    }
}

/// Help source whose nodes are argv prefixes of the target program.
pub struct ProcessSource {
    timeout: Duration,
    env: Option<HashMap<String, String>>,
}

impl ProcessSource {
    pub fn new(options: &ExternalOptions) -> Self {
        Self {
            timeout: Duration::try_from_secs_f64(options.timeout)
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS as u64)),
            env: options.env.clone(),
        }
    }
}

impl HelpSource for ProcessSource {
    type Node = Vec<String>;

    fn capture(&mut self, argv: &mut Vec<String>) -> String {
        run_help(argv, self.timeout, self.env.as_ref())
    }

    fn children(&mut self, argv: &Vec<String>, help: &str) -> Vec<(String, Vec<String>)> {
        parser::find_subcommands(help)
            .into_iter()
            .map(|name| {
                let mut child = argv.clone();
                child.push(name.clone());
                (name, child)
            })
            .collect()
    }
}

/// Run `argv... --help` with no shell interpretation and return the merged
/// output. Never fails: every error becomes an annotated placeholder string.
fn run_help(argv: &[String], timeout: Duration, env: Option<&HashMap<String, String>>) -> String {
    let display = argv.join(" ");
    let Some((program, rest)) = argv.split_first() else {
        return "[error: empty command]".to_string();
    };
    log::debug!("capturing: {display} --help");

    let mut command = Command::new(program);
    command
        .args(rest)
        .arg("--help")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(vars) = env {
        command.env_clear().envs(vars);
    }

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("command not found: {display}");
            return format!("[error: command not found: '{display}']");
        }
        Err(e) => return format!("[error: could not run '{display}': {e}]"),
    };

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        let _ = child.kill();
        return format!("[error: could not capture output of '{display}']");
    };
    let stdout_reader = thread::spawn(move || read_all(stdout));
    let stderr_reader = thread::spawn(move || read_all(stderr));

    // Poll for exit so a hung target cannot stall the walk past the timeout.
    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if started.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                log::warn!("'{display} --help' timed out");
                return format!(
                    "[error: '{display} --help' timed out after {} seconds]",
                    timeout.as_secs_f64()
                );
            }
            Ok(None) => thread::sleep(Duration::from_millis(10)),
            Err(e) => {
                let _ = child.kill();
                return format!("[error: could not wait for '{display}': {e}]");
            }
        }
    };

    // Some tools print help to stderr; merge both streams, stdout first.
    let mut text = String::new();
    text.push_str(&String::from_utf8_lossy(&stdout_reader.join().unwrap_or_default()));
    text.push_str(&String::from_utf8_lossy(&stderr_reader.join().unwrap_or_default()));

    if !status.success() {
        let code = status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        text = format!("[warning: command exited with code {code}]\n\n{text}");
    }
    text
}

fn read_all(mut stream: impl Read) -> Vec<u8> {
    let mut buf = Vec::new();
    let _ = stream.read_to_end(&mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_annotated_not_fatal() {
        let mut source = ProcessSource::new(&ExternalOptions::default());
        let mut node = vec!["/definitely/not/a/real/program".to_string()];
        let text = source.capture(&mut node);
        assert!(text.contains("command not found"), "got: {text}");
    }

    #[test]
    fn children_extend_the_argv_prefix() {
        let mut source = ProcessSource::new(&ExternalOptions::default());
        let node = vec!["pip".to_string()];
        let help = "usage: pip {install,uninstall} ...";
        let children = source.children(&node, help);
        assert_eq!(
            children,
            vec![
                ("install".to_string(), vec!["pip".to_string(), "install".to_string()]),
                ("uninstall".to_string(), vec!["pip".to_string(), "uninstall".to_string()]),
            ]
        );
    }

    #[test]
    fn unrecognized_help_yields_no_children() {
        let mut source = ProcessSource::new(&ExternalOptions::default());
        let node = vec!["tool".to_string()];
        assert!(source.children(&node, "no structure here").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_of_the_target() {
        let mut source = ProcessSource::new(&ExternalOptions::default());
        let mut node = vec!["echo".to_string(), "hello".to_string()];
        let text = source.capture(&mut node);
        assert!(text.contains("hello --help"), "got: {text}");
    }
}
