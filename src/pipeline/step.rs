//! A single pipeline step: one child process, awaited to completion.

use crate::error::{PipelineError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::process::Command;

/// One external invocation in the entrypoint sequence.
#[derive(Debug, Clone)]
pub struct Step {
    name: String,
    program: PathBuf,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
}

/// Success evidence for a finished step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub name: String,
    pub elapsed_secs: f64,
}

impl Step {
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// The full command line, for logs.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Spawn the child and wait for it to exit.
    ///
    /// Non-zero exit becomes [`PipelineError::StepFailed`] carrying the
    /// child's code; death by signal becomes [`PipelineError::StepInterrupted`].
    pub async fn run(&self) -> Result<StepReport> {
        tracing::info!(step = %self.name, command = %self.command_line(), "running step");
        let started = Instant::now();

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let status = command.status().await?;
        let elapsed_secs = started.elapsed().as_secs_f64();

        if status.success() {
            tracing::info!(step = %self.name, elapsed_secs, "step finished");
            Ok(StepReport {
                name: self.name.clone(),
                elapsed_secs,
            })
        } else {
            match status.code() {
                Some(code) => {
                    tracing::error!(step = %self.name, code, "step failed");
                    Err(PipelineError::StepFailed {
                        step: self.name.clone(),
                        code,
                    })
                }
                None => {
                    tracing::error!(step = %self.name, "step terminated by signal");
                    Err(PipelineError::StepInterrupted {
                        step: self.name.clone(),
                    })
                }
            }
        }
    }
}
