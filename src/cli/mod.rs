//! Command line handling: the rose argument grammar and command dispatch.
//!
//! Kept apart from `main.rs` so the whole flow can be driven from tests
//! without a terminal or real processes.

pub mod args;
pub mod runner;

pub use args::{parse_args, FlagValue, Invocation};
pub use runner::{Runner, USAGE};
