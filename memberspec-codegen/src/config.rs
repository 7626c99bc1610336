//! Accessor conventions.
//!
//! The defaults reproduce the canonical accessor shape: `get`/`set`
//! prefixes, `public` accessors, a `final` setter parameter and generated
//! documentation. Hosts may override them from TOML:
//!
//! ```toml
//! getter-prefix = "get"
//! setter-prefix = "set"
//! accessor-modifiers = ["public"]
//! setter-parameter-modifiers = ["final"]
//! documentation = true
//! ```

use std::str::FromStr;

use memberspec_core::{Modifier, ModifierSet};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_FILENAME: &str = "memberspec.toml";

/// Naming and modifier conventions applied by [`crate::MemberSpecs`].
///
/// Only obtainable through [`Default`] or by parsing TOML, so every value
/// has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Conventions {
    getter_prefix: String,
    setter_prefix: String,
    accessor_modifiers: ModifierSet,
    setter_parameter_modifiers: ModifierSet,
    documentation: bool,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            getter_prefix: "get".into(),
            setter_prefix: "set".into(),
            accessor_modifiers: ModifierSet::from([Modifier::Public]),
            setter_parameter_modifiers: ModifierSet::from([Modifier::Final]),
            documentation: true,
        }
    }
}

impl FromStr for Conventions {
    type Err = Box<ConfigError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl Conventions {
    /// Parse conventions with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
    ) -> Result<Self, Box<ConfigError>> {
        let ctx = SourceContext::new(content, filename);
        let file: ConventionsFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        let conventions = Conventions::from(file);
        conventions.validate(&ctx)?;
        Ok(conventions)
    }

    /// Prefix of getter names.
    pub fn getter_prefix(&self) -> &str {
        &self.getter_prefix
    }

    /// Prefix of setter names.
    pub fn setter_prefix(&self) -> &str {
        &self.setter_prefix
    }

    /// Modifiers on generated getters and setters.
    pub fn accessor_modifiers(&self) -> &ModifierSet {
        &self.accessor_modifiers
    }

    /// Modifiers on the setter parameter.
    pub fn setter_parameter_modifiers(&self) -> &ModifierSet {
        &self.setter_parameter_modifiers
    }

    /// Whether accessors carry generated documentation.
    pub fn documentation(&self) -> bool {
        self.documentation
    }

    fn validate(&self, ctx: &SourceContext) -> Result<(), Box<ConfigError>> {
        for (key, prefix) in [
            ("getter-prefix", &self.getter_prefix),
            ("setter-prefix", &self.setter_prefix),
        ] {
            if let Some(reason) = validate_prefix(prefix) {
                return Err(ctx.validation_error(
                    format!("invalid {key} '{prefix}': {reason}"),
                    find_key_span(ctx.src(), key),
                ));
            }
        }

        let access_count = self
            .accessor_modifiers
            .iter()
            .filter(Modifier::is_access)
            .count();
        if access_count > 1 {
            return Err(ctx.validation_error(
                "accessor-modifiers may contain at most one of public, protected or private",
                find_key_span(ctx.src(), "accessor-modifiers"),
            ));
        }

        Ok(())
    }
}

/// Unvalidated contents of a conventions file. Missing keys take defaults.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct ConventionsFile {
    getter_prefix: String,
    setter_prefix: String,
    accessor_modifiers: ModifierSet,
    setter_parameter_modifiers: ModifierSet,
    documentation: bool,
}

impl Default for ConventionsFile {
    fn default() -> Self {
        let defaults = Conventions::default();
        Self {
            getter_prefix: defaults.getter_prefix,
            setter_prefix: defaults.setter_prefix,
            accessor_modifiers: defaults.accessor_modifiers,
            setter_parameter_modifiers: defaults.setter_parameter_modifiers,
            documentation: defaults.documentation,
        }
    }
}

impl From<ConventionsFile> for Conventions {
    fn from(file: ConventionsFile) -> Self {
        Self {
            getter_prefix: file.getter_prefix,
            setter_prefix: file.setter_prefix,
            accessor_modifiers: file.accessor_modifiers,
            setter_parameter_modifiers: file.setter_parameter_modifiers,
            documentation: file.documentation,
        }
    }
}

/// Returns the reason a prefix is unusable, if any.
fn validate_prefix(prefix: &str) -> Option<&'static str> {
    let mut chars = prefix.chars();
    match chars.next() {
        None => return Some("prefix cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("prefix must start with a letter or underscore"),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("prefix may only contain letters, digits and underscores")
    }
}

/// Locate a top-level key for error labels.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            if !rest.trim_start().starts_with('=') {
                return None;
            }
            let column = line.len() - trimmed.len();
            Some(SourceSpan::from((start + column, key.len())))
        })
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to parse accessor conventions")]
    #[diagnostic(code(memberspec::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(memberspec::config::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Source text and filename attached to configuration errors.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<ConfigError> {
        let span = source.span().map(SourceSpan::from);
        Box::new(ConfigError::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelled at `span` when the key was found.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<ConfigError> {
        Box::new(ConfigError::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conventions = Conventions::default();
        assert_eq!(conventions.getter_prefix, "get");
        assert_eq!(conventions.setter_prefix, "set");
        assert_eq!(conventions.accessor_modifiers.to_vec(), vec![Modifier::Public]);
        assert_eq!(
            conventions.setter_parameter_modifiers.to_vec(),
            vec![Modifier::Final]
        );
        assert!(conventions.documentation);
    }

    #[test]
    fn test_empty_document_is_default() {
        let conventions: Conventions = "".parse().unwrap();
        assert_eq!(conventions, Conventions::default());
    }

    #[test]
    fn test_file_defaults_match_conventions() {
        let file = ConventionsFile::default();
        assert_eq!(Conventions::from(file), Conventions::default());
    }

    #[test]
    fn test_source_context_errors() {
        let ctx = SourceContext::new("documentation = 1", "team.toml");
        assert_eq!(ctx.filename(), "team.toml");

        let err = ctx.validation_error("bad value", find_key_span(ctx.src(), "documentation"));
        match *err {
            ConfigError::Validation { span, message, .. } => {
                assert_eq!(message, "bad value");
                assert_eq!(span.map(|s| s.offset()), Some(0));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_prefix() {
        assert_eq!(validate_prefix("get"), None);
        assert_eq!(validate_prefix("_with"), None);
        assert!(validate_prefix("").is_some());
        assert!(validate_prefix("1get").is_some());
        assert!(validate_prefix("get-").is_some());
    }

    #[test]
    fn test_find_key_span() {
        let src = "documentation = false\n  getter-prefix = \"\"\n";
        let span = find_key_span(src, "getter-prefix").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), "getter-prefix".len());
        assert!(find_key_span(src, "setter-prefix").is_none());
    }
}
