use crate::flog::{Level, LockScope};
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
    pub flog: Flog,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Flog {
    pub path: String,
    pub lock_scope: LockScope,
    pub level: Level,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Loads settings from `path`, which must exist, or from the default
/// location if present. Missing keys fall back to built-in defaults.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let source = match path {
        Some(path) => File::with_name(path),
        None => File::with_name(SETTINGS_PATH).required(false),
    };

    let settings: Settings = Config::builder()
        .set_default("log.filter", "warn")
        .and_then(|b| b.set_default("flog.path", "./flog.log"))
        .and_then(|b| b.set_default("flog.lock_scope", "global"))
        .and_then(|b| b.set_default("flog.level", "info"))
        .map_err(|e| anyhow!(e))?
        .add_source(source)
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(parse_settings(Some("settings/does-not-exist.toml")).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(
            &path,
            "[flog]\npath = \"/var/tmp/app.log\"\nlock_scope = \"per_path\"\nlevel = \"warn\"\n",
        )
        .unwrap();

        let settings = parse_settings(path.to_str()).unwrap();

        assert_eq!(settings.log.filter, "warn");
        assert_eq!(settings.flog.path, "/var/tmp/app.log");
        assert_eq!(settings.flog.lock_scope, LockScope::PerPath);
        assert_eq!(settings.flog.level, Level::Warning);
    }

    #[test]
    fn bad_level_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "[flog]\nlevel = \"verbose\"\n").unwrap();

        assert!(parse_settings(path.to_str()).is_err());
    }
}
