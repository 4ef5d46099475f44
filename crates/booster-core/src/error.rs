//! Error types shared by the pipeline and the binaries

use thiserror::Error;

/// Exit status used when an external command fails
pub const COMMAND_FAILURE_EXIT_CODE: i32 = 1;

/// Exit status used when the operator interrupts the interview
pub const ABORT_EXIT_CODE: i32 = 130;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An external command ran but exited unsuccessfully
    #[error("Failed to execute command: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An external command could not be started at all
    #[error("Failed to execute command: {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The operator interrupted an interactive prompt
    #[error("Setup cancelled.")]
    Aborted,

    #[error("Unknown UI library '{0}'. Available: shadcn, flowbite, daisyui, flowbite-react")]
    UnknownUiLibrary(String),
}

impl ScaffoldError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::CommandFailed { .. } | ScaffoldError::Spawn { .. } => {
                COMMAND_FAILURE_EXIT_CODE
            }
            ScaffoldError::Aborted => ABORT_EXIT_CODE,
            ScaffoldError::Io(_) | ScaffoldError::UnknownUiLibrary(_) => 1,
        }
    }

    /// The offending command, for failures raised by the process runner
    pub fn command(&self) -> Option<&str> {
        match self {
            ScaffoldError::CommandFailed { command, .. } | ScaffoldError::Spawn { command, .. } => {
                Some(command)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failures_exit_with_one() {
        let failed = ScaffoldError::CommandFailed {
            command: "npx create-next-app@latest demo".to_string(),
            code: Some(2),
        };
        assert_eq!(failed.exit_code(), 1);
        assert_eq!(failed.command(), Some("npx create-next-app@latest demo"));

        let spawn = ScaffoldError::Spawn {
            command: "missing-tool".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(spawn.exit_code(), 1);
    }

    #[test]
    fn test_failure_message_names_the_command() {
        let failed = ScaffoldError::CommandFailed {
            command: "cd demo && npm install daisyui@latest".to_string(),
            code: None,
        };
        assert_eq!(
            failed.to_string(),
            "Failed to execute command: cd demo && npm install daisyui@latest"
        );
    }

    #[test]
    fn test_abort_uses_interrupt_status() {
        assert_eq!(ScaffoldError::Aborted.exit_code(), 130);
        assert!(ScaffoldError::Aborted.command().is_none());
    }
}
