//! CLI Argument Parsing
//!
//! Both binaries take the same optional flags and no positional arguments;
//! running either with no arguments is the normal invocation.

use clap::{Args, Parser};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Output flags shared by `ansible-setup` and `ansible-verify`.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Write ansible/ansible.cfg and smoke-test the Ansible installation
#[derive(Parser, Debug)]
#[command(name = "ansible-setup")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run from the project root; paths are resolved under ./ansible/.")]
pub struct SetupCli {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Verify inventory, playbooks and deployment values under ansible/
#[derive(Parser, Debug)]
#[command(name = "ansible-verify")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exits with status 1 when any check reports an error.")]
pub struct VerifyCli {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definitions_are_valid() {
        SetupCli::command().debug_assert();
        VerifyCli::command().debug_assert();
    }

    #[test]
    fn zero_arguments_parse() {
        let cli = VerifyCli::try_parse_from(["ansible-verify"]).unwrap();
        assert!(!cli.output.json);
        assert_eq!(cli.output.verbose, 0);
        assert_eq!(cli.output.color, None);
    }

    #[test]
    fn output_flags_parse() {
        let cli =
            SetupCli::try_parse_from(["ansible-setup", "--json", "--color", "never", "-vv"])
                .unwrap();
        assert!(cli.output.json);
        assert_eq!(cli.output.color, Some(ColorWhen::Never));
        assert_eq!(cli.output.verbose, 2);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(VerifyCli::try_parse_from(["ansible-verify", "inventory.ini"]).is_err());
    }
}
