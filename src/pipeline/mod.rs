//! Step sequencing for the pipeline entrypoint.
//!
//! - `step`: a single child-process invocation and its exit handling
//! - `plan`: the init-then-one-task sequence, fail-fast
//! - `tasks`: the catalog of mutually-exclusive processing tasks

pub mod plan;
pub mod step;
pub mod tasks;

pub use plan::Plan;
pub use step::{Step, StepReport};
pub use tasks::{Launcher, Task, TradeSpec};

#[cfg(test)]
mod tests;
