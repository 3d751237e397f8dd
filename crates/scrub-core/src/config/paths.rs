//! Standard locations for scrub configuration files

use std::path::PathBuf;

/// Get the default configuration directory
///
/// Returns: `{config_dir}/scrubline` (e.g. `~/.config/scrubline` on Linux),
/// falling back to the current directory when no config dir is known.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrubline")
}

/// Get the default config file path for a given file name
pub fn default_config_path(filename: &str) -> PathBuf {
    default_config_dir().join(filename)
}
