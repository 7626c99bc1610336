use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for declaration-building operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The argument that violated a construction contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Method name was missing or empty.
    MethodName,
    /// Method body was missing.
    MethodBody,
    /// Field name was missing or empty, or the field type was missing.
    Field,
    /// A string transform was given an empty input.
    Input,
}

impl Argument {
    /// The argument name as reported to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MethodName => "methodName",
            Self::MethodBody => "methodBody",
            Self::Field => "field",
            Self::Input => "input",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid argument: {0}")]
    #[diagnostic(
        code(memberspec::invalid_argument),
        help("the named argument must be present and non-empty")
    )]
    InvalidArgument(Argument),
}

impl Error {
    /// The argument that failed validation.
    pub fn argument(&self) -> Argument {
        match self {
            Self::InvalidArgument(arg) => *arg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_names() {
        assert_eq!(Argument::MethodName.as_str(), "methodName");
        assert_eq!(Argument::MethodBody.as_str(), "methodBody");
        assert_eq!(Argument::Field.as_str(), "field");
        assert_eq!(Argument::Input.as_str(), "input");
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument(Argument::MethodName);
        assert_eq!(err.to_string(), "invalid argument: methodName");
        assert_eq!(err.argument(), Argument::MethodName);
    }
}
