use std::fs;
use std::path::Path;

use crate::cli::Invocation;
use crate::commands::Context;
use crate::domain::version::quote;
use crate::domain::Version;
use crate::error::{Result, RoseError};
use crate::output::Outcome;
use crate::project::Project;
use crate::ui::Prompt;

pub const HELP: &str = "Usage: rose setup

Runs a wizard to help create a `setup.py` file for your project.";

/// Sub-packages nested deeper than this are not discovered
const MAX_PACKAGE_DEPTH: usize = 10;

const DEFAULT_VERSION: &str = "0.1.0";

/// Everything the wizard collected
#[derive(Debug, Clone, PartialEq)]
pub struct SetupAnswers {
    pub package_name: String,
    pub version: Version,
    pub description: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub url: Option<String>,
    pub license: Option<String>,
    /// Dotted package names; empty means a single-module distribution
    pub packages: Vec<String>,
}

impl SetupAnswers {
    /// Renders a `setup.py` that `rose bump` can rewrite later
    pub fn render(&self) -> String {
        let mut fields = vec![
            format!("name={}", quote(&self.package_name)),
            format!("version={}", quote(&self.version.full())),
        ];

        let optional = [
            ("description", &self.description),
            ("author", &self.author),
            ("author_email", &self.author_email),
            ("url", &self.url),
            ("license", &self.license),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.push(format!("{}={}", key, quote(value)));
            }
        }

        if self.packages.is_empty() {
            fields.push(format!("py_modules=[{}]", quote(&self.package_name)));
        } else {
            let packages: Vec<String> = self.packages.iter().map(|p| quote(p)).collect();
            fields.push(format!("packages=[{}]", packages.join(", ")));
        }
        fields.push("zip_safe=False".to_string());

        let mut rendered = String::from("#!/usr/bin/env python\nfrom setuptools import setup\n\n\nsetup(\n");
        for field in fields {
            rendered.push_str("    ");
            rendered.push_str(&field);
            rendered.push_str(",\n");
        }
        rendered.push_str(")\n");
        rendered
    }
}

pub fn run(ctx: &mut Context<'_>, _invocation: &Invocation) -> Result<()> {
    let project = ctx.project;
    let setup_path = project.config().path("manifest_path", project.base_dir())?;
    let display = project.display_path(&setup_path);

    if setup_path.exists() {
        let question = format!("WARNING: '{}' already exists. Overwrite?", display);
        if !ctx.prompt.confirm(&question, false)? {
            ctx.outcome.out("Aborting.");
            ctx.outcome.exit_code = 1;
            return Ok(());
        }
    }

    let answers = run_wizard(project, ctx.prompt, ctx.outcome)?;
    fs::write(&setup_path, answers.render())?;
    tracing::info!(path = %setup_path.display(), package = %answers.package_name, "wrote setup file");

    ctx.outcome.out(format!("Wrote '{}'.", display));
    ctx.outcome.exit_code = 0;
    Ok(())
}

/// Asks every wizard question in order; rejected answers are noted on stderr
pub fn run_wizard(
    project: &Project,
    prompt: &mut dyn Prompt,
    outcome: &mut Outcome,
) -> Result<SetupAnswers> {
    let package_name = prompt
        .ask("Package Name?", None)?
        .ok_or_else(|| RoseError::show_help("A package name is required."))?;
    let version = ask_version(prompt, outcome)?;
    let description = prompt.ask("Short description?", None)?;
    let author = prompt.ask("Author Name?", None)?;
    let author_email = prompt.ask("Author Email?", None)?;
    let url = prompt.ask("Project URL?", None)?;
    let license = prompt.ask("License?", None)?;
    let packages = find_packages(project, &package_name)?;

    Ok(SetupAnswers {
        package_name,
        version,
        description,
        author,
        author_email,
        url,
        license,
        packages,
    })
}

/// Re-asks until the answer parses; running out of input takes the default
fn ask_version(prompt: &mut dyn Prompt, outcome: &mut Outcome) -> Result<Version> {
    loop {
        let raw = prompt
            .ask("Version?", Some(DEFAULT_VERSION))?
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        match Version::parse(&raw) {
            Ok(version) => return Ok(version),
            Err(e) => outcome.err(e.to_string()),
        }
    }
}

/// Dotted names of `package_name` and every directory below it holding an
/// `__init__.py`, shallowest first
pub fn find_packages(project: &Project, package_name: &str) -> Result<Vec<String>> {
    let escaped = glob::Pattern::escape(package_name);
    let mut packages = Vec::new();

    for level in 0..MAX_PACKAGE_DEPTH {
        let pattern = format!("{}/{}__init__.py", escaped, "*/".repeat(level));
        for init in project.glob(&pattern)? {
            if let Some(name) = dotted_name(project.base_dir(), &init) {
                if !packages.contains(&name) {
                    packages.push(name);
                }
            }
        }
    }

    Ok(packages)
}

fn dotted_name(base_dir: &Path, init: &Path) -> Option<String> {
    let package_dir = init.parent()?.strip_prefix(base_dir).ok()?;
    let parts: Vec<String> = package_dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("."))
}
