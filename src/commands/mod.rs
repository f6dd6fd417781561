//! Command implementations for the pipeline entrypoint CLI

pub mod common;
pub mod init;
pub mod run;
pub mod wait;
