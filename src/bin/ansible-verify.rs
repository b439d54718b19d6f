//! ansible-verify - check the Ansible deployment configuration
//!
//! Usage: ansible-verify [--json] [--color <WHEN>] [-v...]
//!
//! Exits 0 when no check reports an error, 1 otherwise.

use anyhow::Result;
use clap::Parser;

use ansible_preflight::commands::verify::cmd_verify;
use ansible_preflight::presentation::logging::init_tracing;
use ansible_preflight::presentation::VerifyCli;

fn main() -> Result<()> {
    let cli = VerifyCli::parse();
    init_tracing(cli.output.verbose);
    cmd_verify(cli.output.json, cli.output.verbose, cli.output.color)
}
