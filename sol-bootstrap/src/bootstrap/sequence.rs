//! The bootstrap sequence itself
//!
//! Prints the banner, classifies the platform and, on Windows, drives rustup and
//! cargo to build Sol. External commands are never checked; only filesystem and
//! console failures stop the sequence.

use crate::bootstrap::console::{Console, first_char_lowercase};
use crate::bootstrap::platform::OperatingSystem;
use crate::bootstrap::runner::CommandRunner;
use crate::bootstrap::{samples, text, toolchain};
use crate::config::Settings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Which branch of the sequence ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A recognised platform that is not supported yet
    Unsupported(OperatingSystem),
    /// The Windows build ran to completion
    Built { examples_included: bool },
    /// The platform name matched nothing; no branch ran
    NoMatch(String),
}

pub struct Bootstrap<'a, R, W> {
    settings: &'a Settings,
    runner: &'a mut dyn CommandRunner,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Bootstrap<'a, R, W> {
    pub fn new(settings: &'a Settings, runner: &'a mut dyn CommandRunner, input: R, output: W) -> Self {
        let console = Console::new(input, output, settings.pause_unit);
        Self {
            settings,
            runner,
            console,
        }
    }

    /// Run the whole sequence for the given platform name, ending with the exit prompt
    pub fn run(&mut self, platform_name: &str) -> Result<Outcome> {
        self.console.say(text::BANNER)?;
        self.console.say(text::GETTING_PLATFORM)?;
        self.console.say(&text::checking_platform(platform_name))?;

        let os = OperatingSystem::classify(platform_name);
        info!(platform = %os, "platform classified");

        let outcome = match os {
            OperatingSystem::Linux | OperatingSystem::MacOS => {
                self.console.say(&text::not_yet_supported(os.name()))?;
                Outcome::Unsupported(os)
            }
            OperatingSystem::Windows => {
                let examples_included = self.build_windows()?;
                Outcome::Built { examples_included }
            }
            OperatingSystem::Unknown(name) => {
                info!(platform = %name, "unrecognised platform, nothing to do");
                Outcome::NoMatch(name)
            }
        };

        self.console.ask(text::EXIT_PROMPT)?;
        Ok(outcome)
    }

    /// Supported build sequence. Returns whether the examples were included.
    fn build_windows(&mut self) -> Result<bool> {
        let settings = self.settings;
        let layout = &settings.layout;
        let channel = settings.channel.as_str();

        self.console.say(text::WINDOWS_SUPPORTED)?;
        self.console.say(text::PREREQUISITES_NOTICE)?;
        self.console.pause(1);

        self.console.say(text::CHECKING_RUSTUP)?;
        self.console.say(text::START_MARKER)?;
        toolchain::rustup_version(self.runner, &settings.rustup);
        self.console.say(text::END_MARKER)?;

        self.console.say(&text::installing_toolchain(channel))?;
        self.console.say(text::START_MARKER)?;
        toolchain::install_toolchain(self.runner, &settings.rustup, channel);
        self.console.say(text::END_MARKER)?;

        self.console.say(&text::overriding_toolchain(channel))?;
        toolchain::override_toolchain(self.runner, &settings.rustup, channel);

        self.console.say(text::BUILDING)?;
        toolchain::cargo_build(self.runner, &settings.cargo);
        // Printed whatever cargo reported
        self.console.say(text::BUILD_SUCCESSFUL)?;

        let answer = self.console.ask(text::EXAMPLES_PROMPT)?;
        let Some(decision) = first_char_lowercase(&answer) else {
            anyhow::bail!("No answer given to the examples prompt");
        };
        let include_examples = decision == "y";
        info!(%decision, include_examples, "examples decision");

        let build_examples = layout.project_dir.join(layout.build_examples());
        samples::remove_examples(&build_examples)?;
        self.console.pause(2);

        if include_examples {
            self.console.say(text::INCLUDING_EXAMPLES)?;
            let source = layout.project_dir.join(layout.examples_source());
            samples::copy_examples(&source, &build_examples)
                .context("Failed to include examples")?;
            self.console.pause(2);

            self.console.say(&text::testing_sample(&layout.sample))?;
            self.console.pause(1);
            toolchain::run_sample(self.runner, &layout.executable_path(), &layout.sample_path());
            self.console.pause(2);
        }

        self.console.say(text::FAREWELL)?;
        Ok(include_examples)
    }

    pub fn into_output(self) -> W {
        self.console.into_parts().1
    }
}
