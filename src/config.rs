//! Configuration management and validation.
//!
//! Provides the converter configuration: the subject URI template, the
//! namespace prefixes declared in the output, and whether the provenance
//! comment block is written. Configuration can be loaded from a TOML file
//! and adjusted with builder methods.

use crate::constants::{DEFAULT_SUBJECT_BASE, namespaces};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A namespace prefix declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub prefix: String,
    pub iri: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Configuration for converting a collection file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Base URI for subjects; the object id is appended
    pub subject_base: String,

    /// Write the attribution and license comment block after the prefixes
    pub include_provenance: bool,

    /// Prefix declarations written at the top of the document
    pub namespaces: Vec<Namespace>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            subject_base: DEFAULT_SUBJECT_BASE.to_string(),
            include_provenance: true,
            namespaces: namespaces::DEFAULTS
                .iter()
                .map(|(prefix, iri)| Namespace::new(*prefix, *iri))
                .collect(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML file, filling unspecified fields with defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        let config: ConverterConfig = toml::from_str(&content)
            .map_err(|e| Error::config_parsing(path.display().to_string(), e))?;
        debug!("Loaded configuration from {}", path.display());

        config.validate()?;
        Ok(config)
    }

    /// Set the subject base URI
    pub fn with_subject_base(mut self, subject_base: impl Into<String>) -> Self {
        self.subject_base = subject_base.into();
        self
    }

    /// Omit the provenance comment block
    pub fn without_provenance(mut self) -> Self {
        self.include_provenance = false;
        self
    }

    /// Declare an additional namespace, replacing any existing declaration of the prefix
    pub fn with_namespace(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        let namespace = Namespace::new(prefix, iri);
        match self
            .namespaces
            .iter_mut()
            .find(|existing| existing.prefix == namespace.prefix)
        {
            Some(existing) => *existing = namespace,
            None => self.namespaces.push(namespace),
        }
        self
    }

    /// Prefix and IRI pairs in declaration order
    pub fn namespace_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .map(|ns| (ns.prefix.as_str(), ns.iri.as_str()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.subject_base.trim().is_empty() {
            return Err(Error::configuration("Subject base URI cannot be empty"));
        }

        if self
            .subject_base
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
        {
            return Err(Error::configuration(format!(
                "Subject base URI contains characters not allowed in an IRI: '{}'",
                self.subject_base
            )));
        }

        for namespace in &self.namespaces {
            if namespace.iri.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Namespace '{}' has an empty IRI",
                    namespace.prefix
                )));
            }
        }

        // Every prefix used by the fixed predicates must be declared
        for (prefix, _) in namespaces::DEFAULTS {
            if !self.namespaces.iter().any(|ns| ns.prefix == *prefix) {
                return Err(Error::configuration(format!(
                    "Required namespace prefix '{}' is not declared",
                    prefix
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.subject_base, DEFAULT_SUBJECT_BASE);
        assert!(config.include_provenance);
        assert_eq!(config.namespaces.len(), namespaces::DEFAULTS.len());
    }

    #[test]
    fn test_builders() {
        let config = ConverterConfig::default()
            .with_subject_base("http://example.org/artwork/")
            .without_provenance()
            .with_namespace("m", "http://example.org/moma#")
            .with_namespace("ex", "http://example.org/");

        assert_eq!(config.subject_base, "http://example.org/artwork/");
        assert!(!config.include_provenance);
        let pairs: Vec<(&str, &str)> = config.namespace_pairs().collect();
        assert_eq!(pairs[0], ("m", "http://example.org/moma#"));
        assert_eq!(pairs.last(), Some(&("ex", "http://example.org/")));
    }

    #[test]
    fn test_validation_failures() {
        let empty_base = ConverterConfig::default().with_subject_base("  ");
        assert!(empty_base.validate().is_err());

        let spaced_base = ConverterConfig::default().with_subject_base("http://a b/");
        assert!(spaced_base.validate().is_err());

        let empty_iri = ConverterConfig::default().with_namespace("ex", "");
        assert!(empty_iri.validate().is_err());

        let mut missing_prefix = ConverterConfig::default();
        missing_prefix.namespaces.retain(|ns| ns.prefix != "xsd");
        assert!(missing_prefix.validate().is_err());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "subject_base = \"http://example.org/work/\"").unwrap();
        writeln!(file, "include_provenance = false").unwrap();

        let config = ConverterConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.subject_base, "http://example.org/work/");
        assert!(!config.include_provenance);
        assert_eq!(config.namespaces, ConverterConfig::default().namespaces);
    }

    #[test]
    fn test_load_file_with_namespaces() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[namespaces]]\nprefix = \"m\"\niri = \"http://example.org/m#\"").unwrap();
        writeln!(file, "[[namespaces]]\nprefix = \"dcterms\"\niri = \"http://purl.org/dc/terms/\"").unwrap();
        writeln!(file, "[[namespaces]]\nprefix = \"schema\"\niri = \"http://schema.org/\"").unwrap();
        writeln!(file, "[[namespaces]]\nprefix = \"xsd\"\niri = \"http://www.w3.org/2001/XMLSchema#\"").unwrap();

        let config = ConverterConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.namespaces.len(), 4);
        assert_eq!(config.namespaces[0].iri, "http://example.org/m#");
        assert_eq!(config.subject_base, DEFAULT_SUBJECT_BASE);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "subject_base = ").unwrap();

        let result = ConverterConfig::load_from_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParsing { .. })));
    }
}
