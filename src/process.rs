//! External process boundary
//!
//! Every subprocess the utilities start goes through [`CommandRunner`], so the
//! setup and verify flows can be exercised without Ansible or Docker installed.

use std::path::Path;
use std::process::Command;

use crate::error::{PreflightError, PreflightResult};

/// An external binary the utilities depend on, with advice for installing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalDependency {
    pub name: &'static str,
    pub install_advice: &'static str,
}

impl ExternalDependency {
    pub const fn new(name: &'static str, install_advice: &'static str) -> Self {
        Self {
            name,
            install_advice,
        }
    }
}

pub const ANSIBLE: ExternalDependency = ExternalDependency::new("Ansible", "pip install ansible");

pub const DOCKER: ExternalDependency = ExternalDependency::new(
    "Docker",
    "Follow instructions on: https://docs.docker.com/engine/install/",
);

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a program to completion and captures its output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> PreflightResult<CommandOutput>;
}

/// Runs real processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> PreflightResult<CommandOutput> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "running external command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| PreflightError::ToolSpawn {
                program: program.to_string(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(program, code = ?result.code, "external command finished");
        Ok(result)
    }
}

/// Scripted runner for tests.
///
/// Responses are keyed by program name; unknown programs fail to spawn.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedRunner {
    responses: std::collections::HashMap<String, CommandOutput>,
    pub calls: std::cell::RefCell<Vec<Vec<String>>>,
}

#[cfg(test)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, program: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.insert(
            program.to_string(),
            CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn was_called(&self, program: &str) -> bool {
        self.calls.borrow().iter().any(|c| c[0] == program)
    }
}

#[cfg(test)]
impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> PreflightResult<CommandOutput> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        self.responses
            .get(program)
            .cloned()
            .ok_or_else(|| PreflightError::ToolSpawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
    }
}
