//! Format registry
//!
//! This module provides a pluggable registry of output formats. Each format
//! implements the `Formatter` trait and can be registered with `FormatRegistry`.

use std::collections::HashMap;
use std::fmt;

use crate::error::PhysioError;
use crate::record::ParseOptions;

/// Error that can occur during formatting
#[derive(Debug)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// The log itself could not be processed
    Physio(PhysioError),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::Physio(err) => write!(f, "{err}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Physio(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PhysioError> for FormatError {
    fn from(err: PhysioError) -> Self {
        FormatError::Physio(err)
    }
}

/// Trait for log formatters
///
/// Implementors run as much of the pipeline as they need on `source` and
/// render the result.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tree", "json")
    fn name(&self) -> &str;

    /// Render a log in this format
    fn serialize(&self, source: &str, options: ParseOptions) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of log formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render a log using the specified format
    pub fn serialize(
        &self,
        source: &str,
        options: ParseOptions,
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(source, options)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults(pretty_json: bool) -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter {
            pretty: pretty_json,
        });
        registry.register(super::SummaryFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::TokensFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _source: &str, _options: ParseOptions) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        assert!(!registry.has("test"));
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let output = registry
            .serialize("", ParseOptions::default(), "test")
            .unwrap();
        assert_eq!(output, "test output");
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        match registry.serialize("", ParseOptions::default(), "nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_formats_match_config_names() {
        let registry = FormatRegistry::default();
        let mut expected: Vec<String> = crate::config::OutputFormat::ALL
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        expected.sort();
        assert_eq!(registry.list_formats(), expected);
    }

    #[test]
    fn test_physio_errors_pass_through() {
        let registry = FormatRegistry::default();
        let err = registry
            .serialize("   ", ParseOptions::default(), "summary")
            .unwrap_err();
        assert!(matches!(err, FormatError::Physio(PhysioError::Lex(_))));
    }
}
