//! Test environment builder for isolated CLI runs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{
    FAKE_ANSIBLE, FAKE_ANSIBLE_INVENTORY, FAKE_DOCKER, PLAYBOOKS, VALID_INVENTORY, VALID_PLAYBOOK,
};

/// Result of running one of the binaries
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp project directory plus a separate directory of fake tools.
///
/// Tool paths are handed to the binaries through `PREFLIGHT_*` variables, so
/// nothing on the host PATH is consulted.
pub struct TestEnv {
    pub project_root: TempDir,
    pub tools_dir: TempDir,
    pub config_home: TempDir,
    ansible: PathBuf,
    ansible_inventory: PathBuf,
    docker: PathBuf,
}

impl TestEnv {
    /// Empty project with working fake tools.
    pub fn new() -> Self {
        let env = Self {
            project_root: tempfile::tempdir().unwrap(),
            tools_dir: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
            ansible: PathBuf::new(),
            ansible_inventory: PathBuf::new(),
            docker: PathBuf::new(),
        };
        env.with_ansible(FAKE_ANSIBLE)
            .with_ansible_inventory(FAKE_ANSIBLE_INVENTORY)
            .with_docker(FAKE_DOCKER)
    }

    /// Project with a complete inventory and three valid playbooks.
    pub fn valid_project() -> Self {
        let env = Self::new();
        env.write("ansible/inventory.ini", VALID_INVENTORY);
        for playbook in PLAYBOOKS {
            env.write(playbook, VALID_PLAYBOOK);
        }
        env
    }

    pub fn with_ansible(mut self, script: &str) -> Self {
        self.ansible = self.install_tool("ansible", script);
        self
    }

    pub fn with_ansible_inventory(mut self, script: &str) -> Self {
        self.ansible_inventory = self.install_tool("ansible-inventory", script);
        self
    }

    pub fn with_docker(mut self, script: &str) -> Self {
        self.docker = self.install_tool("docker", script);
        self
    }

    /// Point `ansible` at a path that does not exist.
    pub fn without_ansible(mut self) -> Self {
        self.ansible = self.tools_dir.path().join("missing-ansible");
        self
    }

    pub fn without_docker(mut self) -> Self {
        self.docker = self.tools_dir.path().join("missing-docker");
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path(relative)).unwrap()
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.project_path(relative)).unwrap();
    }

    pub fn run_setup(&self, args: &[&str]) -> TestResult {
        self.run(env!("CARGO_BIN_EXE_ansible-setup"), args)
    }

    pub fn run_verify(&self, args: &[&str]) -> TestResult {
        self.run(env!("CARGO_BIN_EXE_ansible-verify"), args)
    }

    fn run(&self, bin: &str, args: &[&str]) -> TestResult {
        let output = Command::new(bin)
            .current_dir(self.project_root.path())
            .args(args)
            .env("PREFLIGHT_ANSIBLE", &self.ansible)
            .env("PREFLIGHT_ANSIBLE_INVENTORY", &self.ansible_inventory)
            .env("PREFLIGHT_DOCKER", &self.docker)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("PREFLIGHT_COLOR")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute binary");

        output_to_result(output)
    }

    fn install_tool(&self, name: &str, script: &str) -> PathBuf {
        let path = self.tools_dir.path().join(name);
        fs::write(&path, script).unwrap();
        make_executable(&path);
        path
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
