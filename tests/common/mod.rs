// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use rose::cli::Runner;
use rose::config::Config;
use rose::project::Project;
use rose::shell::MockShell;
use rose::ui::ScriptedPrompt;

pub const SETUP_PY: &str = "#!/usr/bin/env python
try:
    from setuptools import setup
except ImportError:
    from ez_setup import use_setuptools
    use_setuptools()
    from setuptools import setup


setup(
    name='basic',
    version='0.9.1-beta',
    description='A test package.',
    author='John Doe',
    author_email='john@example.com',
    py_modules=['basic']
)
";

pub const CONF_PY: &str = "# -*- coding: utf-8 -*-
project = u'basic'
copyright = u'2013, John Doe'

# The short X.Y version.
version = '0.9.1'
# The full version, including alpha/beta/rc tags.
release = '0.9.1-beta'

html_theme = 'default'
";

pub const INIT_PY: &str = "__author__ = 'John Doe'
__license__ = 'BSD'
__version__ = (0, 9, 1, 'beta')


def hello():
    return 'Hello, world!'
";

/// A small Python project with all three version-carrying files
pub fn basic_module() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "setup.py", SETUP_PY);
    write(dir.path(), "docs/conf.py", CONF_PY);
    write(dir.path(), "basic/__init__.py", INIT_PY);
    dir
}

pub fn write(base: &Path, relative: &str, contents: &str) {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

pub fn read(base: &Path, relative: &str) -> String {
    fs::read_to_string(base.join(relative)).unwrap()
}

pub fn runner(base: &Path) -> Runner<MockShell, ScriptedPrompt> {
    scripted_runner(base, Vec::<String>::new())
}

pub fn scripted_runner<I, S>(base: &Path, answers: I) -> Runner<MockShell, ScriptedPrompt>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Runner::new(
        Project::new(base, Config::default()),
        MockShell::new(),
        ScriptedPrompt::new(answers),
    )
}
