// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PERSON_LENS_DATA_DIR`, `PERSON_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "PersonLens";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "PERSON_LENS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PERSON_LENS_CONFIG_DIR";

/// Global CLI override for data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Only the first call has an effect; later calls are ignored with a
/// warning so a relaunched window cannot change directories mid-session.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("directory overrides were already initialized");
    }
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Resolves a directory from the override chain described in the module docs.
fn resolve_dir(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application data directory path (session state).
///
/// - Linux: `~/.local/share/PersonLens/`
/// - macOS: `~/Library/Application Support/PersonLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PersonLens\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        get_cli_data_dir(),
        ENV_DATA_DIR,
        dirs::data_dir(),
    )
}

/// Returns the application config directory path (`settings.toml`).
///
/// - Linux: `~/.config/PersonLens/`
/// - macOS: `~/Library/Application Support/PersonLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PersonLens\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        get_cli_config_dir(),
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App data dir should contain app name"
            );
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_data_dir() {
        let override_path = PathBuf::from("/custom/data/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_beats_platform_default() {
        let resolved = {
            let _lock = ENV_MUTEX.lock().unwrap();
            std::env::set_var(ENV_DATA_DIR, "/tmp/person-lens-env");
            let resolved = resolve_dir(None, None, ENV_DATA_DIR, Some(PathBuf::from("/home/u")));
            std::env::remove_var(ENV_DATA_DIR);
            resolved
        };
        assert_eq!(resolved, Some(PathBuf::from("/tmp/person-lens-env")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let resolved = {
            let _lock = ENV_MUTEX.lock().unwrap();
            std::env::set_var(ENV_CONFIG_DIR, "");
            let resolved =
                resolve_dir(None, None, ENV_CONFIG_DIR, Some(PathBuf::from("/home/u/.config")));
            std::env::remove_var(ENV_CONFIG_DIR);
            resolved
        };
        assert_eq!(resolved, Some(PathBuf::from("/home/u/.config/PersonLens")));
    }

    #[test]
    fn cli_path_beats_env_var() {
        let resolved = resolve_dir(
            None,
            Some(PathBuf::from("/cli/dir")),
            ENV_DATA_DIR,
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/cli/dir")));
    }
}
