use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between a report that could not be
/// produced because the board service declined the request and a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered (or nothing matched the filters)
    Success = 0,
    /// The board service answered with a non-success status
    BoardServiceError = 1,
    /// Invalid command-line arguments (clap parsing errors, missing repository id)
    InvalidArguments = 2,
    /// Application error (remote rejection, network error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that aborted the command.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ZenqError>() {
            Some(ZenqError::MissingRepoId) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BoardServiceError => write!(f, "Board Service Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for zenq.
#[derive(Debug, Error)]
pub enum ZenqError {
    /// The remote platform refused the request (unknown id, bad token, ...)
    #[error("{message}")]
    RemoteRejection {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to reach {service}\nDetails: {details}\n\n💡 Hint: Please check your network connection and the configured API URL")]
    Transport {
        service: &'static str,
        details: String,
    },

    #[error("Unexpected response from {service}\nDetails: {details}")]
    InvalidResponse {
        service: &'static str,
        details: String,
    },

    #[error("No repository id given\n\n💡 Hint: Pass --repo-id, set ZENQ_REPO_ID, or add repo_id to zenq.config.yml")]
    MissingRepoId,

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
