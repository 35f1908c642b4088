use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Year selected on launch (clamped into the dataset span)
    #[serde(default)]
    pub initial_year: Option<i32>,

    /// Event-loop tick interval in milliseconds
    #[serde(default)]
    pub tick_ms: Option<u64>,

    /// Chart marker glyphs: "braille", "dot" or "block"
    #[serde(default)]
    pub marker: Option<String>,
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("WEALTHSCOPE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("wealthscope").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(
            home.join(".config")
                .join("wealthscope")
                .join("config.toml"),
        );
    }

    directories::ProjectDirs::from("io", "wealthscope", "wealthscope")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            initial_year = 1969
            tick_ms = 100
            marker = "dot"
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_year, Some(1969));
        assert_eq!(config.tick_ms, Some(100));
        assert_eq!(config.marker.as_deref(), Some("dot"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.initial_year.is_none());
        assert!(config.tick_ms.is_none());
        assert!(config.marker.is_none());
    }
}
