use anyhow::{Context, Result};
use clap::Parser;
use sol_bootstrap::bootstrap::{
    Bootstrap, CommandRunner, Elevation, RecordingRunner, SystemElevator, SystemRunner,
    acquire_elevated_privileges, detect_platform_name,
};
use sol_bootstrap::config::{Settings, load_config};
use std::io;
use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build Sol with the nightly toolchain and set up its examples
#[derive(Debug, Parser)]
#[clap(name = "sol-bootstrap", version, about)]
struct Cli {
    /// Skip the administrator elevation request
    #[clap(long, env = "SOL_NO_ELEVATE")]
    no_elevate: bool,

    /// Platform name to use instead of the detected one (Linux, Windows, Darwin, ...)
    #[clap(long, env = "SOL_PLATFORM")]
    platform: Option<String>,

    /// TOML file with setting overrides
    #[clap(short, long, env = "SOL_BOOTSTRAP_CONFIG")]
    config: Option<PathBuf>,

    /// Sol checkout to build (default: current directory)
    #[clap(long, env = "SOL_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Toolchain channel to install and pin
    #[clap(long, env = "SOL_CHANNEL")]
    channel: Option<String>,

    /// rustup program to invoke
    #[clap(long, env = "SOL_RUSTUP")]
    rustup: Option<String>,

    /// cargo program to invoke
    #[clap(long, env = "SOL_CARGO")]
    cargo: Option<String>,

    /// Skip the cosmetic pauses between steps
    #[clap(long)]
    no_pause: bool,

    /// Print external commands instead of running them
    #[clap(long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(path) = &self.config {
            settings = settings.merge_file(load_config(path)?);
        }

        if let Some(project_dir) = &self.project_dir {
            settings.layout.project_dir = PathBuf::from(
                shellexpand::tilde(&project_dir.to_string_lossy()).into_owned(),
            );
        }
        if let Some(channel) = &self.channel {
            settings.channel.clone_from(channel);
        }
        if let Some(rustup) = &self.rustup {
            settings.rustup.clone_from(rustup);
        }
        if let Some(cargo) = &self.cargo {
            settings.cargo.clone_from(cargo);
        }
        if self.no_pause {
            settings.pause_unit = Duration::ZERO;
        }
        Ok(settings)
    }

    /// Arguments for the elevated copy: same flags, no second elevation, same directory
    fn relaunch_args(&self) -> Result<Vec<String>> {
        let mut args: Vec<String> = std::env::args().skip(1).collect();
        args.push("--no-elevate".to_string());
        if self.project_dir.is_none() {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            args.push("--project-dir".to_string());
            args.push(cwd.to_string_lossy().into_owned());
        }
        Ok(args)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    if !cli.no_elevate {
        let elevator = SystemElevator::new(cli.relaunch_args()?);
        if let Elevation::Relaunched { exit_code } = acquire_elevated_privileges(&elevator)? {
            info!(exit_code, "elevated copy finished");
            return Ok(exit_code);
        }
    }

    let mut settings = cli.settings()?;
    settings.enter_project_dir()?;

    let platform = cli.platform.clone().unwrap_or_else(detect_platform_name);

    let mut runner: Box<dyn CommandRunner> = if cli.dry_run {
        Box::new(RecordingRunner::new().echoing())
    } else {
        Box::new(SystemRunner)
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome =
        Bootstrap::new(&settings, runner.as_mut(), stdin.lock(), stdout.lock()).run(&platform)?;
    info!(?outcome, "bootstrap finished");

    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("Error: {e:?}");
            exit(1);
        }
    }
}
