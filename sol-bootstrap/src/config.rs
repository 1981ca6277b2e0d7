//! Bootstrap settings
//!
//! Defaults reproduce the fixed layout of a Sol checkout. A TOML file can
//! override any of them, and command line flags override the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CHANNEL: &str = "nightly";
pub const DEFAULT_EXECUTABLE: &str = "sol.exe";
pub const DEFAULT_SAMPLE: &str = "hello_world.sol";

/// Optional overrides read from a TOML file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub project_dir: Option<PathBuf>,
    pub channel: Option<String>,
    pub rustup: Option<String>,
    pub cargo: Option<String>,
    pub profile: Option<String>,
    pub executable: Option<String>,
    pub sample: Option<String>,
    pub pause_ms: Option<u64>,
}

/// Load a config file, expanding a leading `~`
pub fn load_config(config_path: &Path) -> Result<FileConfig> {
    let expanded = shellexpand::tilde(&config_path.to_string_lossy()).into_owned();
    let content = std::fs::read_to_string(&expanded)
        .with_context(|| format!("Failed to read {expanded}"))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse {expanded}"))
}

/// Filesystem locations touched by the build sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Project checkout the commands run in
    pub project_dir: PathBuf,
    /// Cargo profile directory name under `target`
    pub profile: String,
    /// File name of the built executable
    pub executable: String,
    /// Sample file run after the examples are copied
    pub sample: String,
}

impl Layout {
    pub fn examples_source(&self) -> PathBuf {
        PathBuf::from(".").join("examples")
    }

    pub fn build_output(&self) -> PathBuf {
        PathBuf::from(".").join("target").join(&self.profile)
    }

    pub fn build_examples(&self) -> PathBuf {
        self.build_output().join("examples")
    }

    /// Executable path in Windows form, relative to the project dir
    pub fn executable_path(&self) -> String {
        format!(".\\target\\{}\\{}", self.profile, self.executable)
    }

    /// Sample path as passed to the executable
    pub fn sample_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "./target/{}/examples/{}",
            self.profile, self.sample
        ))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            profile: "debug".to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            sample: DEFAULT_SAMPLE.to_string(),
        }
    }
}

/// Everything the bootstrap sequence needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub layout: Layout,
    pub channel: String,
    pub rustup: String,
    pub cargo: String,
    /// Length of a single cosmetic pause
    pub pause_unit: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            channel: DEFAULT_CHANNEL.to_string(),
            rustup: "rustup".to_string(),
            cargo: "cargo".to_string(),
            pause_unit: Duration::from_secs(1),
        }
    }
}

impl Settings {
    /// Make the project dir the working directory so relative commands resolve there
    pub fn enter_project_dir(&mut self) -> Result<()> {
        let dir = &self.layout.project_dir;
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to enter project directory: {}", dir.display()))?;
        self.layout.project_dir = PathBuf::from(".");
        Ok(())
    }

    /// Apply the values present in a config file
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(project_dir) = file.project_dir {
            self.layout.project_dir = project_dir;
        }
        if let Some(profile) = file.profile {
            self.layout.profile = profile;
        }
        if let Some(executable) = file.executable {
            self.layout.executable = executable;
        }
        if let Some(sample) = file.sample {
            self.layout.sample = sample;
        }
        if let Some(channel) = file.channel {
            self.channel = channel;
        }
        if let Some(rustup) = file.rustup {
            self.rustup = rustup;
        }
        if let Some(cargo) = file.cargo {
            self.cargo = cargo;
        }
        if let Some(pause_ms) = file.pause_ms {
            self.pause_unit = Duration::from_millis(pause_ms);
        }
        self
    }
}
