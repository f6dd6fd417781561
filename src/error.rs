//! Error types for the basketball stats pipeline entrypoint

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid database URL: {message}")]
    InvalidDatabaseUrl { message: String },

    #[error("invalid probe interval `{value}`: must be a positive number of seconds")]
    InvalidInterval { value: String },

    #[error("team name must not be empty")]
    EmptyTeamName,

    #[error("--team1 and --team2 must name different teams (got `{name}` twice)")]
    SameTeam { name: String },

    #[error("loss tolerance must be a non-negative number (got {value})")]
    InvalidTolerance { value: f64 },

    #[error("database not ready after {attempts} probe attempts (last error: {last_error})")]
    NotReady { attempts: u32, last_error: String },

    #[error("step `{step}` exited with code {code}")]
    StepFailed { step: String, code: i32 },

    #[error("step `{step}` was terminated by a signal")]
    StepInterrupted { step: String },
}

impl PipelineError {
    /// Exit code the entrypoint process should report for this error.
    ///
    /// A failing child's exit code bubbles up unchanged, so the container
    /// runtime sees the same status the child reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
