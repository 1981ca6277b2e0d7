//! Fixed console text printed by the bootstrap sequence
//!
//! Everything here is constant so repeated runs print identical bytes.

/// Decorative banner printed right after elevation
pub const BANNER: &str = "\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((           *(((((((((((((  (((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((  (((((((, *(((((((((((((  (((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((  (((((((((((          /(  (((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((           *(  ((((((. /(  (((((((((((\n\
(((((((((((((((((((((((((((((((((((((((((((((((((((, *(  ((((((. /(  (((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((           *(          /(     ((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((\n\
((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((((";

pub const GETTING_PLATFORM: &str = "Getting platform data...";

pub const WINDOWS_SUPPORTED: &str = "Platform Windows is supported! Starting compilation process";

pub const PREREQUISITES_NOTICE: &str =
    "You need rust and rustup to run this, if you don't have both then expect errors.";

pub const START_MARKER: &str = "[START]";

pub const END_MARKER: &str = "[END]";

pub const CHECKING_RUSTUP: &str = "Checking rustup version...";

pub const BUILDING: &str = "Building...";

pub const BUILD_SUCCESSFUL: &str = "The build process was successful!";

pub const EXAMPLES_PROMPT: &str = "Do you want to include some examples into Sol? ";

pub const INCLUDING_EXAMPLES: &str = "Including examples...";

pub const EXIT_PROMPT: &str = "Press the enter key to exit.";

/// Closing message of the supported sequence
pub const FAREWELL: &str = "\
This should get you started with Sol!\n\
You can change, remove and add features, you get it, and you could even help Sol's repository by making pull requests!\n\
Happy Coding 😀";

pub fn checking_platform(name: &str) -> String {
    format!("Checking if platform {name} is supported.")
}

pub fn not_yet_supported(name: &str) -> String {
    format!("Platform {name} not yet supported.")
}

pub fn installing_toolchain(channel: &str) -> String {
    format!("Installing {channel} toolchain... (This might take a while)")
}

pub fn overriding_toolchain(channel: &str) -> String {
    format!("Overriding project's toolchain from stable -> {channel}")
}

pub fn testing_sample(sample_name: &str) -> String {
    format!("Testing `{sample_name}`...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_shape() {
        let lines: Vec<&str> = BANNER.lines().collect();
        assert_eq!(lines.len(), 32);
        assert!(lines.iter().all(|line| line.chars().count() == 80));
        assert!(!BANNER.ends_with('\n'));
    }

    #[test]
    fn test_farewell_lines() {
        let lines: Vec<&str> = FAREWELL.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "This should get you started with Sol!");
        assert!(lines[2].starts_with("Happy Coding"));
    }

    #[test]
    fn test_platform_messages() {
        assert_eq!(
            checking_platform("Darwin"),
            "Checking if platform Darwin is supported."
        );
        assert_eq!(not_yet_supported("Linux"), "Platform Linux not yet supported.");
        assert_eq!(
            testing_sample("hello_world.sol"),
            "Testing `hello_world.sol`..."
        );
    }
}
