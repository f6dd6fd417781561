//! The entrypoint execution plan: schema init, then exactly one task.

use crate::error::Result;
use crate::pipeline::step::{Step, StepReport};

/// Init followed by a single processing task.
///
/// The shell entrypoints this replaces selected the task by editing comments,
/// with nothing preventing two tasks from being enabled at once. Here the
/// plan holds exactly one task by construction.
#[derive(Debug, Clone)]
pub struct Plan {
    init: Step,
    task: Step,
}

impl Plan {
    pub fn new(init: Step, task: Step) -> Self {
        Self { init, task }
    }

    pub fn init(&self) -> &Step {
        &self.init
    }

    pub fn task(&self) -> &Step {
        &self.task
    }

    /// Run init, then the task, strictly in order.
    ///
    /// Fail-fast: if init exits non-zero the task is never spawned, and the
    /// error carries the failing child's exit code.
    pub async fn execute(&self) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(2);
        reports.push(self.init.run().await?);
        reports.push(self.task.run().await?);
        Ok(reports)
    }
}
