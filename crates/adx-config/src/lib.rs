use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_LANGUAGES: &str = include_str!("languages.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Built-in language table is invalid: {0}")]
    BuiltinParseError(toml::de::Error),

    #[error("No configuration for language {name:?} (known: {known})")]
    UnknownLanguage { name: String, known: String },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExclude {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Comment shape a language documents with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocstringKind {
    Block,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocstringsConfig {
    pub kind: DocstringKind,
    /// Whitespace separated markers: `begin [middle] end` or `begin`
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_separator: Option<String>,
    pub docstrings: DocstringsConfig,
}

impl LanguageConfig {
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidExclude {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageConfig>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// The built-in table with any languages from the user's file layered on top.
    pub fn load_or_builtin(config_path: &Path) -> Result<Self, ConfigError> {
        let config_path =
            Self::expand_path(config_path).unwrap_or_else(|| config_path.to_path_buf());
        let user = Self::load_from_path(config_path)?;
        let builtin = Self::builtin()?;
        Ok(match user {
            Some(user) => builtin.merged(user),
            None => builtin,
        })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        toml::from_str(BUILTIN_LANGUAGES).map_err(ConfigError::BuiltinParseError)
    }

    /// Languages in `other` replace same-named ones in `self`.
    pub fn merged(mut self, other: Config) -> Self {
        self.languages.extend(other.languages);
        self
    }

    pub fn language(&self, name: &str) -> Result<&LanguageConfig, ConfigError> {
        self.languages
            .get(name)
            .ok_or_else(|| ConfigError::UnknownLanguage {
                name: name.to_string(),
                known: self.language_names().join(", "),
            })
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/adx");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::env;
    use tempfile::TempDir;

    const SCALA: &str = r#"
[languages.scala]
extensions = [".scala"]
exclude = ["**/target/**"]
namespace_separator = "."

[languages.scala.docstrings]
kind = "block"
format = "/** * */"
"#;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/adx/config.toml"));
    }

    #[test]
    fn test_builtin_languages() {
        let config = Config::builtin().unwrap();

        assert_eq!(config.language_names(), vec!["cpp", "go", "kotlin", "swift"]);

        let swift = config.language("swift").unwrap();
        assert_eq!(swift.docstrings.kind, DocstringKind::Block);
        assert_eq!(swift.docstrings.format, "/** * */");
        assert!(swift.docstrings.parameter_pattern.is_some());

        let cpp = config.language("cpp").unwrap();
        assert_eq!(cpp.docstrings.kind, DocstringKind::Line);
        assert!(cpp.extensions.contains(&".h".to_string()));
        assert_eq!(cpp.namespace_separator, None);
    }

    #[rstest]
    #[case("kotlin")]
    #[case("swift")]
    #[case("cpp")]
    #[case("go")]
    fn test_builtin_excludes_are_valid(#[case] name: &str) {
        let config = Config::builtin().unwrap();
        assert!(config.language(name).unwrap().exclude_patterns().is_ok());
    }

    #[test]
    fn test_unknown_language_lists_known_ones() {
        let config = Config::builtin().unwrap();

        let err = config.language("cobol").unwrap_err();

        assert!(matches!(err, ConfigError::UnknownLanguage { .. }));
        assert!(err.to_string().contains("kotlin"), "{err}");
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let mut config: Config = toml::from_str(SCALA).unwrap();
        let scala = config.languages.get_mut("scala").unwrap();
        scala.exclude = vec!["[unclosed".to_string()];

        let err = scala.exclude_patterns().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidExclude { .. }));
    }

    #[test]
    fn test_unknown_docstring_kind_is_a_parse_error() {
        let content = SCALA.replace("kind = \"block\"", "kind = \"inline\"");
        assert!(toml::from_str::<Config>(&content).is_err());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[languages.scala]\nextensions = 3\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, SCALA).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        let scala = loaded_config.language("scala").unwrap();
        assert_eq!(scala.extensions, vec![".scala".to_string()]);
        assert_eq!(scala.namespace_separator.as_deref(), Some("."));
        assert_eq!(scala.docstrings.kind, DocstringKind::Block);
    }

    #[test]
    fn test_user_languages_layer_over_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let overrides = format!(
            "{SCALA}\n[languages.cpp]\nextensions = [\".cxx\"]\n\n[languages.cpp.docstrings]\nkind = \"line\"\nformat = \"///\"\n"
        );
        std::fs::write(&config_file, overrides).unwrap();

        let config = Config::load_or_builtin(&config_file).unwrap();

        assert_eq!(
            config.language_names(),
            vec!["cpp", "go", "kotlin", "scala", "swift"]
        );
        let cpp = config.language("cpp").unwrap();
        assert_eq!(cpp.extensions, vec![".cxx".to_string()]);
        assert_eq!(cpp.docstrings.format, "///");
    }

    #[test]
    fn test_missing_explicit_config_falls_back_to_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_builtin(&temp_dir.path().join("none.toml")).unwrap();

        assert_eq!(config, Config::builtin().unwrap());
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("ADX_TEST_CONFIG_DIR", "/test/env/path");
        }

        let path = PathBuf::from("$ADX_TEST_CONFIG_DIR/config.toml");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/config.toml")));

        unsafe {
            env::remove_var("ADX_TEST_CONFIG_DIR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/config.toml");
        assert_eq!(Config::expand_path(&path), Some(path));
    }
}
