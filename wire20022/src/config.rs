//! Configuration for the message wrappers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// XML output configuration
    pub xml: XmlConfig,

    /// Default output version per message type, e.g.
    /// `EndpointDetailsReport = "camt.052.001.08"`
    pub versions: BTreeMap<String, String>,

    /// Run document validation after building a document
    pub strict_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "wire20022".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            xml: XmlConfig::default(),
            versions: BTreeMap::new(),
            strict_validation: true,
        }
    }
}

/// XML output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Pretty print XML
    pub indent: bool,

    /// Spaces per nesting level when indenting
    pub indent_width: usize,

    /// Prepend `<?xml version="1.0" encoding="UTF-8"?>`
    pub declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            indent: true,
            indent_width: 2,
            declaration: true,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        Config::default().with_env_overrides()
    }

    /// Load from file, then apply `WIRE20022_*` environment overrides
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        Config::from_file(path)?.with_env_overrides()
    }

    /// Apply `WIRE20022_*` environment overrides on top of this config
    pub fn with_env_overrides(self) -> crate::Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        if let Some(indent) = var("WIRE20022_XML_INDENT") {
            self.xml.indent = parse_flag("WIRE20022_XML_INDENT", &indent)?;
        }

        if let Some(strict) = var("WIRE20022_STRICT_VALIDATION") {
            self.strict_validation = parse_flag("WIRE20022_STRICT_VALIDATION", &strict)?;
        }

        Ok(self)
    }

    /// Configured default version for a message type
    pub fn version_for(&self, message: &str) -> Option<&str> {
        self.versions.get(message).map(String::as_str)
    }
}

fn parse_flag(name: &str, value: &str) -> crate::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(crate::Error::Config(format!("{} must be a boolean, got {:?}", name, other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service_name, "wire20022");
        assert!(config.xml.indent);
        assert_eq!(config.xml.indent_width, 2);
        assert!(config.xml.declaration);
        assert!(config.versions.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
strict_validation = false

[xml]
indent_width = 4

[versions]
EndpointDetailsReport = "camt.052.001.08"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.strict_validation);
        assert_eq!(config.xml.indent_width, 4);
        assert!(config.xml.indent);
        assert_eq!(config.version_for("EndpointDetailsReport"), Some("camt.052.001.08"));
        assert_eq!(config.version_for("ReturnRequest"), None);
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strict_validation = \"maybe\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration: Failed to parse config"));
    }

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strict_validation = false\n\n[xml]\nindent_width = 4").unwrap();

        let config = Config::from_file(file.path())
            .unwrap()
            .with_overrides(|name| match name {
                "WIRE20022_STRICT_VALIDATION" => Some("true".to_string()),
                "WIRE20022_XML_INDENT" => Some("off".to_string()),
                _ => None,
            })
            .unwrap();
        assert!(config.strict_validation);
        assert!(!config.xml.indent);
        assert_eq!(config.xml.indent_width, 4);

        let err = Config::default()
            .with_overrides(|_| Some("sometimes".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("WIRE20022_XML_INDENT must be a boolean"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(parse_flag("X", "sometimes").is_err());
    }
}
