//! Error types shared across director.
//!
//! Errors raised by a verb are opaque to the dispatch core: they travel as
//! [`InvocationError`] and are only classified by the filter chain, which
//! matches on their concrete type.

use thiserror::Error;

/// Any error raised while invoking a verb.
pub type InvocationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of invoking a verb.
pub type InvocationResult = Result<(), InvocationError>;

/// A required parameter was not supplied on the command line.
///
/// Raised at invocation time, so it can be matched by a filter like any other
/// error a verb raises.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{verb}() missing required argument: '{parameter}'")]
pub struct MissingArgumentError {
    /// Verb being invoked.
    pub verb: String,
    /// Parameter without value.
    pub parameter: String,
}

/// An action was asked for a verb it does not implement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("action has no verb '{verb}'")]
pub struct UnknownVerbError {
    /// The requested verb.
    pub verb: String,
}

impl UnknownVerbError {
    /// Create an UnknownVerbError.
    pub fn new(verb: impl Into<String>) -> Self {
        Self { verb: verb.into() }
    }
}

/// Errors raised while registering nouns or verbs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A noun is already registered.
    #[error("noun already registered: {noun}")]
    DuplicateNoun {
        /// The repeated noun.
        noun: String,
    },

    /// A verb is already registered on the action.
    #[error("verb already registered: {verb}")]
    DuplicateVerb {
        /// The repeated verb.
        verb: String,
    },

    /// The verb name belongs to a built-in verb.
    #[error("verb name is reserved: {verb}")]
    ReservedVerb {
        /// The reserved name.
        verb: String,
    },

    /// The name cannot be typed as a noun or verb.
    #[error("invalid name: '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

impl RegistryError {
    /// Create a DuplicateNoun error.
    pub fn duplicate_noun(noun: impl Into<String>) -> Self {
        Self::DuplicateNoun { noun: noun.into() }
    }

    /// Create a DuplicateVerb error.
    pub fn duplicate_verb(verb: impl Into<String>) -> Self {
        Self::DuplicateVerb { verb: verb.into() }
    }

    /// Create a ReservedVerb error.
    pub fn reserved_verb(verb: impl Into<String>) -> Self {
        Self::ReservedVerb { verb: verb.into() }
    }

    /// Create an InvalidName error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }
}

/// Whether `name` can be typed as a noun or verb.
///
/// Names starting with an underscore are private, as are names with
/// whitespace or a leading dash.
pub(crate) fn is_public_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('_')
        && !name.starts_with('-')
        && !name.chars().any(char::is_whitespace)
}
