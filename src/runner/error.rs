//! Dispatch errors.

use crate::error::InvocationError;
use crate::parser::ParseError;
use crate::signature::SignatureError;
use thiserror::Error;

/// Errors that end a dispatch without a filtered exit.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No action is registered for the noun.
    #[error("no action named '{noun}'")]
    NounNotFound {
        /// The requested noun.
        noun: String,
    },

    /// The action has no such verb.
    #[error("{noun} has no verb '{verb}'")]
    VerbNotFound {
        /// Resolved noun.
        noun: String,
        /// The requested verb.
        verb: String,
    },

    /// The verb's signature could not be inspected.
    #[error("cannot inspect verb: {0}")]
    Signature(#[from] SignatureError),

    /// The command line did not fit the verb's flags.
    #[error("invalid arguments: {0}")]
    Parse(#[from] ParseError),

    /// The verb failed and no filter chain was supplied.
    #[error("{0}")]
    Invocation(InvocationError),
}

impl DispatchError {
    /// Create a NounNotFound error.
    pub fn noun_not_found(noun: impl Into<String>) -> Self {
        Self::NounNotFound { noun: noun.into() }
    }

    /// Create a VerbNotFound error.
    pub fn verb_not_found(noun: impl Into<String>, verb: impl Into<String>) -> Self {
        Self::VerbNotFound {
            noun: noun.into(),
            verb: verb.into(),
        }
    }

    /// The verb's own error, when this is an invocation failure.
    pub fn invocation(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Invocation(error) => Some(&**error),
            _ => None,
        }
    }
}
