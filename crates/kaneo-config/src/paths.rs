//! Discovery of the config file location.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file path.
pub const CONFIG_ENV: &str = "KANEO_CONFIG";

const APP_DIR_NAME: &str = "kaneo";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolves the config file path.
///
/// Priority: explicit path > `$KANEO_CONFIG` > `$XDG_CONFIG_HOME/kaneo/config.yaml`
/// > `$HOME/.config/kaneo/config.yaml` > `./kaneo.yaml`.
///
/// The file does not need to exist.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = non_empty_env(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Some(xdg) = non_empty_env("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
    }

    if let Some(home) = non_empty_env("HOME").or_else(|| non_empty_env("USERPROFILE")) {
        return Path::new(&home)
            .join(".config")
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME);
    }

    PathBuf::from("kaneo.yaml")
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
