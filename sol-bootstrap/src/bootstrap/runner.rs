//! External command execution
//!
//! Commands are fire-and-forget: the runner hands back the raw exit code and
//! never turns a failing command into an error.

use tracing::{debug, warn};

/// Raw exit code of an external command.
///
/// `None` when the program could not be started or was terminated by a signal.
pub type RawExitStatus = Option<i32>;

/// A single external invocation, program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Command line as it would be typed in a shell
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Something that can run an external program to completion
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> RawExitStatus;
}

/// Runs commands on the host with inherited stdio
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> RawExitStatus {
        let invocation = Invocation::new(program, args);
        debug!(command = %invocation.command_line(), "running");

        match duct::cmd(program, args).unchecked().run() {
            Ok(output) => {
                let code = output.status.code();
                if !output.status.success() {
                    warn!(command = %invocation.command_line(), ?code, "command failed, continuing");
                }
                code
            }
            Err(e) => {
                warn!(command = %invocation.command_line(), error = %e, "command could not be started, continuing");
                None
            }
        }
    }
}

/// Records invocations instead of running them.
///
/// Backs `--dry-run`; every command reports `status` as its exit code.
#[derive(Debug)]
pub struct RecordingRunner {
    pub invocations: Vec<Invocation>,
    status: RawExitStatus,
    echo: bool,
}

impl RecordingRunner {
    /// Runner that stays silent and reports success
    pub fn new() -> Self {
        Self {
            invocations: Vec::new(),
            status: Some(0),
            echo: false,
        }
    }

    /// Report `status` for every recorded command
    pub fn with_status(mut self, status: RawExitStatus) -> Self {
        self.status = status;
        self
    }

    /// Print each command to stdout as it is recorded
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(Invocation::command_line).collect()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> RawExitStatus {
        let invocation = Invocation::new(program, args);
        if self.echo {
            println!("[dry-run] {}", invocation.command_line());
        }
        self.invocations.push(invocation);
        self.status
    }
}
