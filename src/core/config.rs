//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.picker/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub menus: Vec<MenuEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub vim_keys: Option<bool>,
    pub default_menu: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub accent: Option<String>,
}

/// A named option list. Choosing an option equal to another menu's name
/// opens that menu on top.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuEntry {
    pub name: String,
    pub title: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Select an option";
pub const DEFAULT_ACCENT: &str = "magenta";
pub const DEFAULT_VIM_KEYS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub vim_keys: bool,
    pub accent: String,
    /// Options given directly (CLI args or stdin). Take priority over menus.
    pub options: Vec<String>,
    /// Menu to open first when no direct options were given.
    pub start_menu: Option<String>,
    pub menus: Vec<MenuEntry>,
}

/// Values coming from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub menu: Option<String>,
    pub no_vim: bool,
    pub options: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.picker/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".picker").join("config.toml"))
}

/// Returns the default log file, `~/.picker/picker.log`, next to the config.
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".picker").join("picker.log"))
}

/// Load config from `~/.picker/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PickerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PickerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PickerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PickerConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<PickerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PickerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Written on first run. Every setting is commented out, so it parses to
/// `PickerConfig::default()` until the user edits it.
pub const DEFAULT_CONFIG: &str = r##"# Picker Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Select an option"     # Or set PICKER_TITLE env var
# vim_keys = true                # j/k move the cursor
# default_menu = "main"          # Opened when no options are given

# [theme]
# accent = "magenta"             # Color name or "#rrggbb"; or PICKER_ACCENT

# [[menus]]
# name = "main"
# title = "Main menu"
# options = ["tools", "status"]  # "tools" opens the menu below

# [[menus]]
# name = "tools"
# title = "Tools"
# options = ["hammer", "saw"]
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PickerConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Title: CLI → env → config → default
    let title = cli
        .title
        .clone()
        .or_else(|| std::env::var("PICKER_TITLE").ok())
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Accent: env → config → default
    let accent = std::env::var("PICKER_ACCENT")
        .ok()
        .or_else(|| config.theme.accent.clone())
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string());

    // --no-vim can only turn vim keys off
    let vim_keys = !cli.no_vim && config.general.vim_keys.unwrap_or(DEFAULT_VIM_KEYS);

    // Start menu: CLI → config
    let start_menu = cli
        .menu
        .clone()
        .or_else(|| config.general.default_menu.clone());

    ResolvedConfig {
        title,
        vim_keys,
        accent,
        options: cli.options.clone(),
        start_menu,
        menus: config.menus.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PickerConfig::default();
        assert!(config.menus.is_empty());
        assert!(config.general.title.is_none());
        assert!(config.theme.accent.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PickerConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(resolved.vim_keys);
        assert!(resolved.options.is_empty());
        assert!(resolved.start_menu.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PickerConfig {
            general: GeneralConfig {
                title: None,
                vim_keys: Some(false),
                default_menu: Some("main".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(!resolved.vim_keys);
        assert_eq!(resolved.start_menu.as_deref(), Some("main"));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PickerConfig {
            general: GeneralConfig {
                title: Some("From file".to_string()),
                vim_keys: Some(true),
                default_menu: Some("main".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            title: Some("From CLI".to_string()),
            menu: Some("tools".to_string()),
            no_vim: true,
            options: vec!["x".to_string()],
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.title, "From CLI");
        assert_eq!(resolved.start_menu.as_deref(), Some("tools"));
        assert!(!resolved.vim_keys);
        assert_eq!(resolved.options, vec!["x".to_string()]);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r##"
[general]
title = "Pick"
vim_keys = false
default_menu = "main"

[theme]
accent = "#ff8800"

[[menus]]
name = "main"
title = "Main menu"
options = ["tools", "status"]

[[menus]]
name = "tools"
options = ["hammer"]
"##;
        let config: PickerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.title.as_deref(), Some("Pick"));
        assert_eq!(config.general.vim_keys, Some(false));
        assert_eq!(config.theme.accent.as_deref(), Some("#ff8800"));
        assert_eq!(config.menus.len(), 2);
        assert_eq!(config.menus[0].options, vec!["tools", "status"]);
        assert_eq!(config.menus[1].title, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[theme]
accent = "cyan"
"#;
        let config: PickerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme.accent.as_deref(), Some("cyan"));
        assert!(config.general.default_menu.is_none());
        assert!(config.menus.is_empty());
    }

    #[test]
    fn test_menu_without_options_parses() {
        let toml_str = r#"
[[menus]]
name = "empty"
"#;
        let config: PickerConfig = toml::from_str(toml_str).unwrap();
        assert!(config.menus[0].options.is_empty());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("picker-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ntitle = 3").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));

        fs::remove_dir_all(&dir).unwrap();
    }

    /// Uncomment the setting lines of the default file, keeping prose comments.
    fn uncommented(text: &str) -> String {
        text.lines()
            .map(|line| match line.strip_prefix("# ") {
                Some(rest) if rest.starts_with('[') || rest.contains(" = ") => rest,
                _ => line,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_default_config_text_parses_to_defaults() {
        let config: PickerConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.menus.is_empty());
        assert!(config.general.default_menu.is_none());
        assert!(config.theme.accent.is_none());
    }

    #[test]
    fn test_default_config_settings_parse_when_uncommented() {
        let config: PickerConfig = toml::from_str(&uncommented(DEFAULT_CONFIG)).unwrap();
        assert_eq!(config.general.title.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(config.general.vim_keys, Some(DEFAULT_VIM_KEYS));
        assert_eq!(config.general.default_menu.as_deref(), Some("main"));
        assert_eq!(config.theme.accent.as_deref(), Some(DEFAULT_ACCENT));
        assert_eq!(config.menus.len(), 2);
        assert_eq!(config.menus[0].name, "main");
        assert_eq!(config.menus[0].options, vec!["tools", "status"]);
        assert_eq!(config.menus[1].name, "tools");
        assert_eq!(config.menus[1].title.as_deref(), Some("Tools"));
    }

    #[test]
    fn test_generate_default_config_writes_file() {
        let dir = std::env::temp_dir().join(format!("picker-default-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        generate_default_config(&path);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(load_config_from(&path).unwrap().menus.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_log_path_sits_next_to_config() {
        if let (Some(log), Some(config)) = (log_path(), config_path()) {
            assert_eq!(log.parent(), config.parent());
            assert!(log.ends_with(".picker/picker.log"));
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/picker/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
