//! Generated `ansible.cfg`
//!
//! The file content is a fixed template. [`AnsibleSettings`] mirrors its
//! `[defaults]` section as a typed value for diagnostics only; it is never
//! rendered into the file.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{PreflightError, PreflightResult};
use crate::layout::{ANSIBLE_CFG_PATH, INVENTORY_PATH};

pub const ANSIBLE_CFG_TEMPLATE: &str = "[defaults]
inventory = ansible/inventory.ini
remote_user = ubuntu
private_key_file = ~/.ssh/id_rsa
host_key_checking = False
timeout = 30
gathering = smart
fact_caching = jsonfile
fact_caching_connection = /tmp/ansible_facts
fact_caching_timeout = 86400
roles_path = ansible/roles
library = ansible/library

[privilege_escalation]
become = True
become_method = sudo
become_user = root
become_ask_pass = False

[ssh_connection]
ssh_args = -o ControlMaster=auto -o ControlPersist=60s
pipelining = True
";

/// Structured view of the `[defaults]` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsibleSettings {
    pub inventory: String,
    pub remote_user: String,
    pub private_key_file: String,
    pub host_key_checking: bool,
    pub timeout: u32,
    pub gathering: String,
    pub fact_caching: String,
    pub fact_caching_connection: String,
    pub fact_caching_timeout: u64,
}

impl Default for AnsibleSettings {
    fn default() -> Self {
        Self {
            inventory: INVENTORY_PATH.to_string(),
            remote_user: "ubuntu".to_string(),
            private_key_file: "~/.ssh/id_rsa".to_string(),
            host_key_checking: false,
            timeout: 30,
            gathering: "smart".to_string(),
            fact_caching: "jsonfile".to_string(),
            fact_caching_connection: "/tmp/ansible_facts".to_string(),
            fact_caching_timeout: 86400,
        }
    }
}

impl AnsibleSettings {
    /// Settings as `(key, value)` pairs using ansible.cfg spelling.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("inventory", self.inventory.clone()),
            ("remote_user", self.remote_user.clone()),
            ("private_key_file", self.private_key_file.clone()),
            ("host_key_checking", ini_bool(self.host_key_checking).to_string()),
            ("timeout", self.timeout.to_string()),
            ("gathering", self.gathering.clone()),
            ("fact_caching", self.fact_caching.clone()),
            (
                "fact_caching_connection",
                self.fact_caching_connection.clone(),
            ),
            ("fact_caching_timeout", self.fact_caching_timeout.to_string()),
        ]
    }
}

fn ini_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// What happened to `ansible.cfg` on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    /// Existing content differed; it is kept for diff display.
    Replaced { previous: String },
    Unchanged,
}

impl WriteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStatus::Created => "created",
            WriteStatus::Replaced { .. } => "replaced",
            WriteStatus::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub status: WriteStatus,
    pub hash: String,
}

/// `sha256:<hex>` digest of the given content.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

/// Write the template to `<root>/ansible/ansible.cfg`, always overwriting.
///
/// The file is replaced atomically and the `ansible/` directory is created when
/// missing. The write happens even when the content is already identical.
pub fn write_ansible_cfg(root: &Path) -> PreflightResult<WriteOutcome> {
    let path = root.join(ANSIBLE_CFG_PATH);

    let status = match std::fs::read_to_string(&path) {
        Ok(existing) if existing == ANSIBLE_CFG_TEMPLATE => WriteStatus::Unchanged,
        Ok(existing) => WriteStatus::Replaced { previous: existing },
        Err(_) if path.exists() => WriteStatus::Replaced {
            previous: String::new(),
        },
        Err(_) => WriteStatus::Created,
    };

    atomic_write(&path, ANSIBLE_CFG_TEMPLATE.as_bytes())?;
    tracing::debug!(path = %path.display(), status = status.as_str(), "wrote ansible.cfg");

    Ok(WriteOutcome {
        path,
        status,
        hash: content_hash(ANSIBLE_CFG_TEMPLATE),
    })
}

/// Write content to a file atomically using the tempfile + rename pattern.
fn atomic_write(path: &Path, content: &[u8]) -> PreflightResult<()> {
    let write_err = |message: String| PreflightError::Write {
        path: path.to_path_buf(),
        message,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| write_err(e.error.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_creates_ansible_dir_and_file() {
        let dir = tempdir().unwrap();

        let outcome = write_ansible_cfg(dir.path()).unwrap();

        assert_eq!(outcome.status, WriteStatus::Created);
        assert_eq!(
            fs::read_to_string(dir.path().join("ansible/ansible.cfg")).unwrap(),
            ANSIBLE_CFG_TEMPLATE
        );
    }

    #[test]
    fn write_overwrites_foreign_content() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ansible")).unwrap();
        fs::write(dir.path().join("ansible/ansible.cfg"), "[defaults]\nforks = 50\n").unwrap();

        let outcome = write_ansible_cfg(dir.path()).unwrap();

        assert_eq!(
            outcome.status,
            WriteStatus::Replaced {
                previous: "[defaults]\nforks = 50\n".to_string()
            }
        );
        assert_eq!(
            fs::read_to_string(&outcome.path).unwrap(),
            ANSIBLE_CFG_TEMPLATE
        );
    }

    #[test]
    fn second_write_is_unchanged_and_byte_identical() {
        let dir = tempdir().unwrap();

        let first = write_ansible_cfg(dir.path()).unwrap();
        let first_bytes = fs::read(&first.path).unwrap();
        let second = write_ansible_cfg(dir.path()).unwrap();

        assert_eq!(second.status, WriteStatus::Unchanged);
        assert_eq!(first.hash, second.hash);
        assert_eq!(fs::read(&second.path).unwrap(), first_bytes);
    }

    #[test]
    fn settings_agree_with_template_defaults() {
        let settings = AnsibleSettings::default();
        for (key, value) in settings.entries() {
            let line = format!("{} = {}\n", key, value);
            assert!(
                ANSIBLE_CFG_TEMPLATE.contains(&line),
                "template is missing `{}`",
                line.trim_end()
            );
        }
    }

    #[test]
    fn content_hash_is_prefixed_hex() {
        let hash = content_hash("");
        assert_eq!(
            hash,
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
