//! Parameter values and parameter specs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value a verb parameter can default to or be bound to.
///
/// Only booleans and strings exist on the command line; `None` stands for an
/// explicit "no value" default.
///
/// # Example
///
/// ```
/// use director::signature::ParamValue;
///
/// assert_eq!(ParamValue::from(false).as_bool(), Some(false));
/// assert_eq!(ParamValue::from("last").as_str(), Some("last"));
/// assert!(ParamValue::None.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A boolean value.
    Bool(bool),
    /// A literal string value.
    Str(String),
    /// No value.
    None,
}

impl ParamValue {
    /// Return the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Return the string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Check for the explicit `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, ParamValue::None)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::None => write!(f, "none"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

/// One declared parameter of a verb.
///
/// `default` is `None` when the parameter declares no default at all, which
/// is different from a declared default of [`ParamValue::None`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name as the verb declares it (underscores, no dashes).
    pub name: String,

    /// Declared default, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
}

impl ParameterSpec {
    /// A parameter without a default.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter with a declared default.
    pub fn with_default(name: impl Into<String>, default: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// Whether the parameter declares a default.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The declared default, if any.
    pub fn default_value(&self) -> Option<&ParamValue> {
        self.default.as_ref()
    }
}
