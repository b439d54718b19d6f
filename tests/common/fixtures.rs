//! Reusable project content.

#![allow(dead_code)]

pub const VALID_INVENTORY: &str = "[webservers]
localhost ansible_connection=local

[webservers:vars]
azure_registry=shanumathew
aws_ecr_account=317009750119
docker_image=react-chatbot:latest
azure_port=3000
";

pub const VALID_PLAYBOOK: &str = "- hosts: localhost
  gather_facts: false
  tasks:
    - name: Build image
      command: docker build -t react-chatbot:latest .
";

pub const BROKEN_PLAYBOOK: &str = "- hosts: [localhost\n  tasks:\n";

pub const PLAYBOOKS: [&str; 3] = [
    "ansible/main.yml",
    "ansible/docker-build-push.yml",
    "ansible/azure-container-manage.yml",
];

/// `ansible` stand-in: prints a version, answers ping with pong.
pub const FAKE_ANSIBLE: &str = "#!/bin/sh
if [ \"$1\" = \"--version\" ]; then
  echo 'ansible [core 2.16.3]'
  exit 0
fi
echo 'localhost | SUCCESS => {\"ping\": \"pong\"}'
";

pub const FAKE_ANSIBLE_INVENTORY: &str = "#!/bin/sh
echo '{\"_meta\": {\"hostvars\": {}}, \"all\": {\"children\": [\"webservers\"]}}'
";

pub const FAKE_DOCKER: &str = "#!/bin/sh
echo 'Docker version 24.0.7, build afdd53b'
";

pub const FAILING_TOOL: &str = "#!/bin/sh
echo 'boom' >&2
exit 1
";
