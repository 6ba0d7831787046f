use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// build/lint tools.
///
/// - `Success` (0): Command completed, no issues found
/// - `Failure` (1): Command completed but found issues; nothing was emitted
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, no issues found.
    Success,
    /// Command completed but found issues; nothing was emitted.
    Failure,
    /// Command failed due to internal error (config error, I/O error, etc.).
    Error,
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
