//! Toolchain and build invocations
//!
//! One function per external command. None of them inspect the result; the
//! raw exit status is returned so callers and tests can see it.

use crate::bootstrap::runner::{CommandRunner, RawExitStatus};
use std::path::Path;

/// Query the installed rustup version
pub fn rustup_version(runner: &mut dyn CommandRunner, rustup: &str) -> RawExitStatus {
    runner.run(rustup, &["--version"])
}

/// Install a toolchain channel (e.g. `nightly`)
pub fn install_toolchain(
    runner: &mut dyn CommandRunner,
    rustup: &str,
    channel: &str,
) -> RawExitStatus {
    runner.run(rustup, &["toolchain", "install", channel])
}

/// Pin the current directory to a toolchain channel
pub fn override_toolchain(
    runner: &mut dyn CommandRunner,
    rustup: &str,
    channel: &str,
) -> RawExitStatus {
    runner.run(rustup, &["override", "set", channel])
}

/// Build the project in the current directory
pub fn cargo_build(runner: &mut dyn CommandRunner, cargo: &str) -> RawExitStatus {
    runner.run(cargo, &["build"])
}

/// Run the freshly built executable against a sample source file
pub fn run_sample(
    runner: &mut dyn CommandRunner,
    executable: &str,
    sample: &Path,
) -> RawExitStatus {
    let sample = sample.to_string_lossy();
    runner.run(executable, &[sample.as_ref()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::runner::RecordingRunner;

    #[test]
    fn test_toolchain_commands() {
        let mut runner = RecordingRunner::new();
        rustup_version(&mut runner, "rustup");
        install_toolchain(&mut runner, "rustup", "nightly");
        override_toolchain(&mut runner, "rustup", "nightly");
        cargo_build(&mut runner, "cargo");

        assert_eq!(
            runner.command_lines(),
            vec![
                "rustup --version",
                "rustup toolchain install nightly",
                "rustup override set nightly",
                "cargo build",
            ]
        );
    }

    #[test]
    fn test_exit_status_is_passed_through() {
        let mut runner = RecordingRunner::new().with_status(Some(1));
        assert_eq!(cargo_build(&mut runner, "cargo"), Some(1));

        let mut runner = RecordingRunner::new().with_status(None);
        assert_eq!(install_toolchain(&mut runner, "rustup", "nightly"), None);
    }

    #[test]
    fn test_run_sample_passes_path_verbatim() {
        let mut runner = RecordingRunner::new();
        run_sample(
            &mut runner,
            ".\\target\\debug\\sol.exe",
            Path::new("./target/debug/examples/hello_world.sol"),
        );
        assert_eq!(
            runner.command_lines(),
            vec![".\\target\\debug\\sol.exe ./target/debug/examples/hello_world.sol"]
        );
    }
}
