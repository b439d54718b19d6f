//! ansible-setup - write ansible/ansible.cfg and smoke-test Ansible
//!
//! Usage: ansible-setup [--json] [--color <WHEN>] [-v...]

use anyhow::Result;
use clap::Parser;

use ansible_preflight::commands::setup::cmd_setup;
use ansible_preflight::presentation::logging::init_tracing;
use ansible_preflight::presentation::SetupCli;

fn main() -> Result<()> {
    let cli = SetupCli::parse();
    init_tracing(cli.output.verbose);
    cmd_setup(cli.output.json, cli.output.verbose, cli.output.color)
}
