//! Build protocol planning
//!
//! Turns a [`PackageSpec`] into the ordered list of steps its protocol runs.
//! Planning is pure; [`crate::core::builder`] executes the steps.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::config::defaults::{CMAKE_BUILD_DIR, MAKE};
use crate::core::build_env::BuildEnvironment;
use crate::core::package::PackageSpec;

/// A subprocess invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Program to run
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Working directory, relative to the extracted source root
    pub workdir: PathBuf,
}

impl Invocation {
    /// Invocation run from the source root
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
            workdir: PathBuf::new(),
        }
    }

    /// Run from a subdirectory of the source root
    #[must_use]
    pub fn in_dir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// One step of a build protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum Step {
    /// Run a subprocess; non-zero exit aborts the run
    Run(Invocation),
    /// Create a directory under the source root; fails if it exists
    CreateDir { path: PathBuf },
    /// Symlink `alias -> target` in the prefix's `bin` directory
    Link { alias: String, target: String },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run(invocation) => write!(f, "{invocation}"),
            Self::CreateDir { path } => write!(f, "mkdir {}", path.display()),
            Self::Link { alias, target } => write!(f, "ln -s {target} {alias}"),
        }
    }
}

fn make_build(env: &BuildEnvironment) -> Vec<String> {
    vec![format!("-j{}", env.jobs())]
}

fn make_install() -> Vec<String> {
    vec!["install".to_string()]
}

/// `./configure --prefix=<prefix> <options>`, `make -j<jobs>`, `make install`
fn autoconf_steps(pkg: &PackageSpec, env: &BuildEnvironment) -> Vec<Step> {
    let mut configure = vec![format!("--prefix={}", env.prefix().display())];
    configure.extend(pkg.options.iter().map(|o| env.expand(o)));

    vec![
        Step::Run(Invocation::new("./configure", configure)),
        Step::Run(Invocation::new(MAKE, make_build(env))),
        Step::Run(Invocation::new(MAKE, make_install())),
    ]
}

/// `mkdir build`, then in `build/`: `cmake ..`, `make -j<jobs>`, `make install`
fn cmake_steps(pkg: &PackageSpec, env: &BuildEnvironment) -> Vec<Step> {
    let mut configure = vec![
        "..".to_string(),
        format!("-DCMAKE_INSTALL_PREFIX={}", env.prefix().display()),
        "-DCMAKE_BUILD_TYPE=Release".to_string(),
    ];
    configure.extend(pkg.options.iter().map(|o| env.expand(o)));

    vec![
        Step::CreateDir {
            path: PathBuf::from(CMAKE_BUILD_DIR),
        },
        Step::Run(Invocation::new("cmake", configure).in_dir(CMAKE_BUILD_DIR)),
        Step::Run(Invocation::new(MAKE, make_build(env)).in_dir(CMAKE_BUILD_DIR)),
        Step::Run(Invocation::new(MAKE, make_install()).in_dir(CMAKE_BUILD_DIR)),
    ]
}

/// Plan every step for one package: bootstrap, base protocol, links.
pub fn plan(pkg: &PackageSpec, env: &BuildEnvironment) -> Vec<Step> {
    let mut steps: Vec<Step> = pkg
        .protocol
        .bootstrap_commands()
        .iter()
        .map(|cmd| Step::Run(Invocation::new(cmd, Vec::new())))
        .collect();

    if pkg.protocol.uses_cmake() {
        steps.extend(cmake_steps(pkg, env));
    } else {
        steps.extend(autoconf_steps(pkg, env));
    }

    steps.extend(
        pkg.protocol
            .links()
            .iter()
            .map(|(alias, target)| Step::Link {
                alias: (*alias).to_string(),
                target: (*target).to_string(),
            }),
    );

    steps
}
