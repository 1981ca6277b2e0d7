use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV_VARS: [&str; 8] = [
    "SOL_NO_ELEVATE",
    "SOL_CHANNEL",
    "SOL_PLATFORM",
    "SOL_BOOTSTRAP_CONFIG",
    "SOL_PROJECT_DIR",
    "SOL_RUSTUP",
    "SOL_CARGO",
    "RUST_LOG",
];

fn bootstrap(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sol-bootstrap").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--no-elevate")
        .arg("--no-pause")
        .arg("--project-dir")
        .arg(project);
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("examples")).unwrap();
    fs::write(dir.path().join("examples/hello_world.sol"), "print(1)").unwrap();
    fs::create_dir_all(dir.path().join("target/debug/examples")).unwrap();
    dir
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_linux_is_not_supported() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Linux"])
        .write_stdin("\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Checking if platform Linux is supported.\n"));
    assert!(stdout.contains("Platform Linux not yet supported.\n"));
    assert!(stdout.ends_with("Press the enter key to exit."));
    assert!(!stdout.contains("Building..."));
}

#[test]
fn test_unknown_platform_prints_only_banner_and_prompt() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Plan9"])
        .write_stdin("\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("(((("));
    assert!(!stdout.contains("not yet supported"));
    assert!(!stdout.contains("Starting compilation process"));
    assert!(stdout.ends_with("Checking if platform Plan9 is supported.\nPress the enter key to exit."));
}

#[test]
fn test_windows_dry_run_with_examples() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Windows", "--dry-run"])
        .write_stdin("y\n\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let commands: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("[dry-run] "))
        .collect();
    assert_eq!(
        commands,
        vec![
            "rustup --version",
            "rustup toolchain install nightly",
            "rustup override set nightly",
            "cargo build",
            ".\\target\\debug\\sol.exe ./target/debug/examples/hello_world.sol",
        ]
    );
    assert!(dir.path().join("target/debug/examples/hello_world.sol").exists());
    assert!(stdout.contains("Happy Coding"));
}

#[test]
fn test_windows_dry_run_declining_examples() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Windows", "--dry-run", "--channel", "nightly-2024-06-01"])
        .write_stdin("No\n\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[dry-run] rustup toolchain install nightly-2024-06-01\n"));
    assert!(!stdout.contains("sol.exe"));
    assert!(!dir.path().join("target/debug/examples").exists());
}

#[test]
fn test_missing_build_examples_aborts() {
    let dir = project();
    fs::remove_dir_all(dir.path().join("target/debug/examples")).unwrap();

    let output = bootstrap(dir.path())
        .args(["--platform", "Windows", "--dry-run"])
        .write_stdin("y\n\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to remove directory"));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("The build process was successful!"));
    assert!(!stdout.contains("Happy Coding"));
    assert!(!stdout.contains("Press the enter key to exit."));
}

#[test]
fn test_empty_examples_answer_aborts_without_deleting() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Windows", "--dry-run"])
        .write_stdin("\n\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No answer given"));
    assert!(dir.path().join("target/debug/examples").exists());
    assert!(!stdout_of(&output).contains("Happy Coding"));
}

#[test]
fn test_closed_stdin_at_exit_prompt_fails() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Darwin"])
        .write_stdin("")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("Platform Darwin not yet supported.\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unexpected end of input"));
}

#[test]
fn test_channel_from_environment() {
    let dir = project();
    let output = bootstrap(dir.path())
        .env("SOL_CHANNEL", "nightly-2025-01-01")
        .args(["--platform", "Windows", "--dry-run"])
        .write_stdin("n\n\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("[dry-run] rustup override set nightly-2025-01-01\n"));
}

#[test]
fn test_invalid_config_aborts_before_banner() {
    let dir = project();
    let config = dir.path().join("bootstrap.toml");
    fs::write(&config, "pause_ms = \"soon\"\n").unwrap();

    let output = bootstrap(dir.path())
        .args(["--platform", "Linux", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse"));
}

#[cfg(unix)]
#[test]
fn test_windows_sequence_ignores_command_failures() {
    let dir = project();
    let output = bootstrap(dir.path())
        .args(["--platform", "Windows", "--rustup", "false", "--cargo", "false"])
        .write_stdin("n\n\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[START]\n[END]\n"));
    assert!(stdout.contains("The build process was successful!"));
    assert!(stdout.contains("Happy Coding"));
}
