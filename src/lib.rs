pub mod boundary;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod project;
pub mod shell;
pub mod ui;

pub use error::{Result, RoseError};
