//! Statement and documentation fragments.
//!
//! Fragments are templates: a format string with `$L` placeholders plus the
//! positional values that fill them. They are assembled here and serialized
//! by the renderer; nothing in this crate executes them.

use serde::{Deserialize, Serialize};

/// A format string with positional `$L` substitutions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template {
    /// Format string. `$L` is replaced by the next argument, `$$` by `$`.
    pub format: String,
    /// Substitution values, in placeholder order.
    pub args: Vec<String>,
}

impl Template {
    /// Create a template with no arguments.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            args: Vec::new(),
        }
    }

    /// Add a substitution value.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Add multiple substitution values.
    pub fn args(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Substitute the arguments into the format string.
    ///
    /// A `$L` with no remaining argument is kept verbatim; any other `$`
    /// sequence is copied through unchanged.
    pub fn expand(&self) -> String {
        let mut out = String::with_capacity(self.format.len());
        let mut args = self.args.iter();
        let mut chars = self.format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('L') => {
                    chars.next();
                    match args.next() {
                        Some(arg) => out.push_str(arg),
                        None => out.push_str("$L"),
                    }
                }
                Some('$') => {
                    chars.next();
                    out.push('$');
                }
                _ => out.push('$'),
            }
        }

        out
    }
}

/// An ordered sequence of statements making up a method body.
///
/// An empty body is still a body: it renders as `{}`, which is different
/// from having no body at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    statements: Vec<Template>,
}

impl Body {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement.
    pub fn statement(mut self, stmt: Template) -> Self {
        self.statements.push(stmt);
        self
    }

    /// Append a statement in place.
    pub fn push(&mut self, stmt: Template) {
        self.statements.push(stmt);
    }

    /// The statements, in order.
    pub fn statements(&self) -> &[Template] {
        &self.statements
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if there are no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl FromIterator<Template> for Body {
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

/// One line of member documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocLine {
    /// Free text.
    Text(Template),
    /// Describes the return value (`@return` in Javadoc).
    Returns(Template),
}

impl DocLine {
    /// The template of this line.
    pub fn template(&self) -> &Template {
        match self {
            Self::Text(t) | Self::Returns(t) => t,
        }
    }

    /// Expanded text of this line.
    pub fn expand(&self) -> String {
        self.template().expand()
    }
}

/// Ordered documentation lines attached to a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    lines: Vec<DocLine>,
}

impl Documentation {
    /// Create empty documentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text line.
    pub fn text(mut self, line: Template) -> Self {
        self.lines.push(DocLine::Text(line));
        self
    }

    /// Add a return-value line.
    pub fn returns(mut self, line: Template) -> Self {
        self.lines.push(DocLine::Returns(line));
        self
    }

    /// Append a line in place.
    pub fn push(&mut self, line: DocLine) {
        self.lines.push(line);
    }

    /// The lines, in order.
    pub fn lines(&self) -> &[DocLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_expand() {
        let t = Template::new("this.$L = $L").arg("name").arg("name");
        assert_eq!(t.expand(), "this.name = name");
    }

    #[test]
    fn test_template_expand_escapes() {
        assert_eq!(Template::new("cost: $$$L").arg("5").expand(), "cost: $5");
        assert_eq!(Template::new("$N stays").expand(), "$N stays");
        assert_eq!(Template::new("trailing $").expand(), "trailing $");
    }

    #[test]
    fn test_template_missing_argument() {
        assert_eq!(Template::new("$L and $L").arg("a").expand(), "a and $L");
    }

    #[test]
    fn test_body() {
        let mut body = Body::new().statement(Template::new("int x = 0"));
        body.push(Template::new("return x"));

        assert_eq!(body.len(), 2);
        assert_eq!(body.statements()[1].expand(), "return x");
        assert!(Body::new().is_empty());
    }

    #[test]
    fn test_documentation() {
        let doc = Documentation::new()
            .text(Template::new("Gets the $L.").arg("id"))
            .returns(Template::new("Returns the $L.").arg("id"));

        assert_eq!(doc.len(), 2);
        assert!(matches!(doc.lines()[1], DocLine::Returns(_)));
        assert_eq!(doc.lines()[0].expand(), "Gets the id.");
    }
}
