//! Error types for flag parsing.

use thiserror::Error;

/// Errors raised while binding command-line tokens to a flag grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token is not shaped `--name` or `--name=value`.
    #[error("unrecognized token: '{token}' (expected --name or --name=value)")]
    UnrecognizedToken {
        /// The offending token.
        token: String,
    },

    /// The flag is not part of the verb's grammar.
    #[error("unknown flag: {flag}")]
    UnknownFlag {
        /// The flag as typed.
        flag: String,
    },

    /// A valued flag was given without `=value`.
    #[error("flag {flag} requires a value (use {flag}=value)")]
    MissingValue {
        /// The flag as typed.
        flag: String,
    },

    /// A boolean flag was given a value that is not a boolean literal.
    #[error("flag {flag} expects a boolean, got '{value}'")]
    InvalidBoolean {
        /// The flag as typed.
        flag: String,
        /// The rejected value.
        value: String,
    },
}

impl ParseError {
    /// Create an UnrecognizedToken error.
    pub fn unrecognized_token(token: impl Into<String>) -> Self {
        Self::UnrecognizedToken {
            token: token.into(),
        }
    }

    /// Create an UnknownFlag error.
    pub fn unknown_flag(flag: impl Into<String>) -> Self {
        Self::UnknownFlag { flag: flag.into() }
    }

    /// Create a MissingValue error.
    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue { flag: flag.into() }
    }

    /// Create an InvalidBoolean error.
    pub fn invalid_boolean(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            flag: flag.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_token_carries_token() {
        let error = ParseError::unrecognized_token("positional");
        assert!(error.to_string().contains("'positional'"));
    }

    #[test]
    fn test_unknown_flag_names_flag() {
        let error = ParseError::unknown_flag("--nope");
        assert_eq!(error.to_string(), "unknown flag: --nope");
    }

    #[test]
    fn test_missing_value_suggests_syntax() {
        let error = ParseError::missing_value("--opt");
        assert!(error.to_string().contains("--opt=value"));
    }
}
