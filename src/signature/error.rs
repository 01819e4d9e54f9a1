//! Error types for signature inspection.

use thiserror::Error;

/// Errors raised while inspecting a verb signature.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The target exposes no parameter metadata.
    #[error("cannot inspect '{target}': no signature metadata")]
    Opaque {
        /// Name of the uninspectable target.
        target: String,
    },

    /// A parameter name is declared twice.
    #[error("duplicate parameter '{parameter}' in '{target}'")]
    DuplicateParameter {
        /// Name of the inspected target.
        target: String,
        /// The repeated parameter name.
        parameter: String,
    },

    /// A parameter name cannot be expressed as a flag.
    #[error("invalid parameter name '{parameter}' in '{target}'")]
    InvalidName {
        /// Name of the inspected target.
        target: String,
        /// The offending parameter name.
        parameter: String,
    },
}

impl SignatureError {
    /// Create an Opaque error.
    pub fn opaque(target: impl Into<String>) -> Self {
        Self::Opaque {
            target: target.into(),
        }
    }

    /// Create a DuplicateParameter error.
    pub fn duplicate_parameter(target: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::DuplicateParameter {
            target: target.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an InvalidName error.
    pub fn invalid_name(target: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::InvalidName {
            target: target.into(),
            parameter: parameter.into(),
        }
    }
}
