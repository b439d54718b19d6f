//! Presentation Layer
//!
//! - `cli` - argument parsing for both binaries (via clap)
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod logging;

pub use cli::{ColorWhen, OutputArgs, SetupCli, VerifyCli};
