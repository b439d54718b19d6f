//! Command entry points shared by both binaries.

pub mod setup;
pub mod verify;

use std::path::Path;

use crate::config::Config;
use crate::ui::output::print_config_warnings;

/// Load configuration for `root` (env overrides applied), reporting unknown
/// keys on stderr.
pub(crate) fn load_config(root: &Path, json: bool) -> Config {
    let (config, warnings) = Config::load_or_default(Some(root));
    if json {
        for w in &warnings {
            tracing::warn!(key = %w.key, file = %w.file.display(), "unknown config key");
        }
    } else {
        print_config_warnings(&warnings);
    }
    config
}
