//! Command Line Interface (CLI) layer for tempconv.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). Embedders should call
//! `tempconv::convert` directly instead of going through the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
