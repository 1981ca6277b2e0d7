//! Administrator privilege acquisition
//!
//! The bootstrap must run elevated before it prints anything. When the current
//! process is not elevated it is relaunched through the platform's elevation
//! mechanism and the caller is expected to exit with the relaunch's status.

use snafu::{ResultExt, Snafu};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Snafu)]
pub enum ElevationError {
    #[snafu(display("Failed to locate the current executable"))]
    CurrentExe { source: io::Error },

    #[snafu(display("Failed to relaunch through {program} with elevated privileges"))]
    Relaunch { program: String, source: io::Error },
}

/// Outcome of an elevation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    /// The current process already holds administrator rights
    AlreadyElevated,
    /// An elevated copy was launched; the current process should exit with `exit_code`
    Relaunched { exit_code: i32 },
}

/// Platform privilege mechanism
pub trait Elevator {
    fn is_elevated(&self) -> bool;

    /// Start an elevated copy of this program.
    ///
    /// Returns the exit code the current process should terminate with.
    fn relaunch_elevated(&self) -> Result<i32, ElevationError>;
}

/// Make sure the process runs elevated, relaunching it if needed
pub fn acquire_elevated_privileges(elevator: &dyn Elevator) -> Result<Elevation, ElevationError> {
    if elevator.is_elevated() {
        info!(user = %whoami::username(), "running with elevated privileges");
        return Ok(Elevation::AlreadyElevated);
    }

    info!("requesting elevated privileges");
    let exit_code = elevator.relaunch_elevated()?;
    Ok(Elevation::Relaunched { exit_code })
}

/// Elevator for the host platform.
///
/// `args` are passed to the relaunched copy in place of the original arguments.
#[derive(Debug)]
pub struct SystemElevator {
    args: Vec<String>,
}

impl SystemElevator {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    fn current_exe() -> Result<PathBuf, ElevationError> {
        std::env::current_exe().context(CurrentExeSnafu)
    }
}

#[cfg(windows)]
impl Elevator for SystemElevator {
    fn is_elevated(&self) -> bool {
        use windows::Win32::Foundation::{CloseHandle, HANDLE};
        use windows::Win32::Security::{
            GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
        };
        use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

        // SAFETY: GetCurrentProcess returns a pseudo-handle that doesn't need closing
        let current_process = unsafe { GetCurrentProcess() };
        let mut token = HANDLE::default();

        // SAFETY: valid process handle and out pointer
        if unsafe { OpenProcessToken(current_process, TOKEN_QUERY, &mut token) }.is_err() {
            return false;
        }

        let mut elevation = TOKEN_ELEVATION::default();
        let mut return_length = 0u32;

        // SAFETY: valid token handle and a buffer sized for TOKEN_ELEVATION
        let info_result = unsafe {
            GetTokenInformation(
                token,
                TokenElevation,
                Some(std::ptr::from_mut(&mut elevation).cast()),
                u32::try_from(size_of::<TOKEN_ELEVATION>()).unwrap_or(u32::MAX),
                &mut return_length,
            )
        };

        // SAFETY: token was opened above
        let _ = unsafe { CloseHandle(token) };

        info_result.is_ok() && elevation.TokenIsElevated != 0
    }

    fn relaunch_elevated(&self) -> Result<i32, ElevationError> {
        let exe_path = Self::current_exe()?;

        let powershell_cmd = start_process_command(&exe_path.to_string_lossy(), &self.args);

        // The elevated copy opens its own console, so this process does not wait for it
        std::process::Command::new("powershell.exe")
            .arg("-Command")
            .arg(powershell_cmd)
            .spawn()
            .context(RelaunchSnafu {
                program: "powershell.exe",
            })?;

        info!("elevation request sent, approve the prompt to continue");
        Ok(0)
    }
}

/// PowerShell `Start-Process ... -Verb RunAs` line relaunching `exe` with `args`
#[cfg(any(windows, test))]
fn start_process_command(exe: &str, args: &[String]) -> String {
    let mut command = format!(
        "Start-Process -FilePath {} -Verb RunAs",
        powershell_literal(exe)
    );
    if !args.is_empty() {
        let command_line: Vec<String> = args.iter().map(String::as_str).map(quote_windows_arg).collect();
        command.push_str(" -ArgumentList ");
        command.push_str(&powershell_literal(&command_line.join(" ")));
    }
    command
}

/// Single-quoted PowerShell string literal; `'` is the only character needing escape
#[cfg(any(windows, test))]
fn powershell_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quote one argument so `CommandLineToArgvW` reads it back unchanged.
///
/// Backslashes are literal except before a `"`, where they must be doubled.
#[cfg(any(windows, test))]
fn quote_windows_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');

    let mut backslashes = 0;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            other => {
                quoted.extend(std::iter::repeat_n('\\', backslashes));
                quoted.push(other);
                backslashes = 0;
            }
        }
    }
    // Trailing backslashes precede the closing quote
    quoted.extend(std::iter::repeat_n('\\', backslashes * 2));
    quoted.push('"');
    quoted
}

#[cfg(unix)]
impl Elevator for SystemElevator {
    fn is_elevated(&self) -> bool {
        // SAFETY: geteuid has no preconditions and cannot fail
        unsafe { libc::geteuid() == 0 }
    }

    fn relaunch_elevated(&self) -> Result<i32, ElevationError> {
        let exe_path = Self::current_exe()?;

        let mut args = vec![exe_path.into_os_string()];
        args.extend(self.args.iter().map(Into::into));

        let output = duct::cmd("sudo", args)
            .unchecked()
            .run()
            .context(RelaunchSnafu { program: "sudo" })?;

        Ok(output.status.code().unwrap_or(1))
    }
}
