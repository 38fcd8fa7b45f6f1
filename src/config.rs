//! Settings loaded from an optional TOML file and overridden from the
//! command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ui::ThemeName;

pub const APP_NAME: &str = "knowledge-quiz";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Palette used to draw the quiz.
    pub theme: ThemeName,
    /// JSON question bank replacing the built-in one.
    pub questions: Option<PathBuf>,
    /// Where tracing output goes. Nothing is logged without it.
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load `explicit` if given. Otherwise fall back to the per-user config
    /// file when it exists, then to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Command-line values win over whatever the file said.
    pub fn merge_cli(
        mut self,
        theme: Option<ThemeName>,
        questions: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if questions.is_some() {
            self.questions = questions;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml("", Path::new("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.theme, ThemeName::Ocean);
    }

    #[test]
    fn test_parse_full_config() {
        let settings = Settings::from_toml(
            r#"
            theme = "dusk"
            questions = "bank.json"
            log_file = "/tmp/quiz.log"
            "#,
            Path::new("config.toml"),
        )
        .unwrap();

        assert_eq!(settings.theme, ThemeName::Dusk);
        assert_eq!(settings.questions, Some(PathBuf::from("bank.json")));
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/quiz.log")));
    }

    #[test]
    fn test_unknown_keys_and_themes_are_rejected() {
        let err = Settings::from_toml("colour = \"red\"", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("c.toml"));

        assert!(Settings::from_toml("theme = \"neon\"", Path::new("c.toml")).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = Settings {
            theme: ThemeName::Dusk,
            questions: Some(PathBuf::from("file.json")),
            log_file: None,
        };

        let merged = file
            .clone()
            .merge_cli(None, None, Some(PathBuf::from("quiz.log")));
        assert_eq!(merged.theme, ThemeName::Dusk);
        assert_eq!(merged.questions, Some(PathBuf::from("file.json")));
        assert_eq!(merged.log_file, Some(PathBuf::from("quiz.log")));

        let merged = file.merge_cli(Some(ThemeName::Ocean), Some(PathBuf::from("cli.json")), None);
        assert_eq!(merged.theme, ThemeName::Ocean);
        assert_eq!(merged.questions, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_discover_reads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dusk\"").unwrap();

        let settings = Settings::discover(Some(file.path())).unwrap();
        assert_eq!(settings.theme, ThemeName::Dusk);

        let err = Settings::discover(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
