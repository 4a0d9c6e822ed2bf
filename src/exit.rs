// src/exit.rs
//! Standardized process exit codes for `cotag`.

use std::process::Termination;

use crate::error::CotagError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CotagExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO while writing the report).
    Error = 1,
    /// Input validation failed (missing input path, invalid config, malformed report).
    InvalidInput = 2,
}

impl CotagExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run to its exit code.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CotagError>() {
            Some(
                CotagError::MissingInput(_)
                | CotagError::Config { .. }
                | CotagError::InvalidConfig(_)
                | CotagError::MalformedLine { .. },
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for CotagExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
