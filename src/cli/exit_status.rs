use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, every string is fully translated
/// - `Failure` (1): Command completed but translations are missing
/// - `Error` (2): Command failed (malformed catalog, invalid config, unreadable input)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found missing translations or duplicates.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl ExitStatus {
    pub fn from_failed(failed: bool) -> Self {
        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
