use serde::Deserialize;
use std::env;
use std::fs;
use std::iter::FromIterator;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::render::{CalendarRenderer, DEFAULT_SEPARATOR};

const CONFIG_PATH_ENV_VAR: &str = "ZELLER_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    let config_xdg = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
        Some(PathBuf::from_iter(
            [dir, "zeller".to_string(), "config.toml".to_string()].iter(),
        ))
    } else {
        dirs::home_dir().map(|home| {
            PathBuf::from_iter(
                [
                    home.as_path(),
                    Path::new(".config"),
                    Path::new("zeller"),
                    Path::new("config.toml"),
                ]
                .iter(),
            )
        })
    };

    locations.extend(config_xdg);
    locations.extend(dirs::home_dir().map(|home| home.join(".zeller.toml")));

    locations
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_owned()
}

fn default_prompts() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_prompts")]
    pub prompts: bool,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            separator: default_separator(),
            prompts: default_prompts(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        content.parse::<Config>().map_err(|err| {
            let msg = format!(
                "{}: {}",
                path.display(),
                err.message.as_deref().unwrap_or_default()
            );
            err.with_msg(&msg)
        })
    }

    /// Log level to switch to after startup. An explicit `RUST_LOG` keeps
    /// precedence over the config file.
    pub fn log_level_override(&self, rust_log: Option<&str>) -> Option<&str> {
        match rust_log {
            Some(_) => None,
            None => self.log_level.as_deref(),
        }
    }

    pub fn renderer(&self) -> CalendarRenderer {
        CalendarRenderer::new(&self.separator)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Loads `path` if given, else the first existing default location, else
/// the built-in defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.is_file() {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                &format!("Config file '{}' does not exist", path.display()),
            ));
        }
        log::info!("Loading config from {}", path.display());
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            log::info!("Loading config from {}", location.display());
            return Config::load(&location);
        }
        log::debug!("No config at {}", location.display());
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}
