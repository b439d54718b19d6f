//! Common test utilities for the CLI tests.
//!
//! - `TestEnv`: temp project directory plus fake Ansible/Docker executables
//! - Fixtures: inventory and playbook content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
