//! Fixed project layout and expected deployment values.
//!
//! All paths are relative to the working directory the utilities run in.

/// Generated Ansible configuration file.
pub const ANSIBLE_CFG_PATH: &str = "ansible/ansible.cfg";

/// Inventory file owned by the deployment repository.
pub const INVENTORY_PATH: &str = "ansible/inventory.ini";

/// Playbooks that must exist and parse as YAML.
pub const PLAYBOOKS: [&str; 3] = [
    "ansible/main.yml",
    "ansible/docker-build-push.yml",
    "ansible/azure-container-manage.yml",
];

/// A value the inventory must contain, as a literal `key=value` substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedValue {
    pub label: &'static str,
    pub needle: &'static str,
}

impl ExpectedValue {
    pub const fn new(label: &'static str, needle: &'static str) -> Self {
        Self { label, needle }
    }

    /// Plain substring match; position, comments and sections are not considered.
    pub fn is_present_in(&self, content: &str) -> bool {
        content.contains(self.needle)
    }
}

pub const AZURE_REGISTRY: ExpectedValue =
    ExpectedValue::new("Azure Registry", "azure_registry=shanumathew");

pub const AWS_ECR_ACCOUNT: ExpectedValue =
    ExpectedValue::new("AWS ECR Account", "aws_ecr_account=317009750119");

pub const DOCKER_IMAGE: ExpectedValue =
    ExpectedValue::new("Docker Image", "docker_image=react-chatbot:latest");

pub const CONTAINER_PORT: ExpectedValue = ExpectedValue::new("Container Port", "azure_port=3000");

pub const EXPECTED_VALUES: [ExpectedValue; 4] =
    [AZURE_REGISTRY, AWS_ECR_ACCOUNT, DOCKER_IMAGE, CONTAINER_PORT];
