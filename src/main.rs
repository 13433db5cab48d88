use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rose::cli::Runner;
use rose::project::Project;
use rose::shell::SystemShell;
use rose::ui::{self, StdinPrompt};

#[derive(clap::Parser)]
#[command(
    name = "rose",
    about = "A version by any other name would be just as sweet.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(long, value_name = "DIR", help = "Project directory (defaults to the current one)")]
    base_dir: Option<PathBuf>,

    #[arg(long, help = "Log what rose is doing")]
    verbose: bool,

    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "<command> [args] [flags]"
    )]
    command: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "rose=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init (e.g. from a test harness) is harmless
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn load_project(base_dir: Option<PathBuf>) -> Result<Project> {
    let base_dir = match base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine the current directory")?,
    };
    let home = dirs::home_dir();

    Project::load(&base_dir, home.as_deref())
        .with_context(|| format!("Error loading config for '{}'", base_dir.display()))
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let project = match load_project(args.base_dir) {
        Ok(project) => project,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let shell = SystemShell::new(project.base_dir());
    let mut runner = Runner::new(project, shell, StdinPrompt);
    let code = runner.from_cli(args.command);
    std::process::exit(code);
}
