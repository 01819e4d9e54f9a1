//! Signature descriptors and the inspector that reads them.

use super::error::SignatureError;
use super::value::{ParamValue, ParameterSpec};
use std::collections::HashSet;

/// Declared parameter list of a verb.
///
/// A signature is written by the plugin author instead of being reflected
/// from a live function. Method signatures carry a receiver (`self`) which is
/// never reported as a parameter.
///
/// # Example
///
/// ```
/// use director::signature::{Signature, SignatureInspector};
///
/// // verb(self, opt, another=False, last="last")
/// let signature = Signature::method()
///     .param("opt")
///     .param_default("another", false)
///     .param_default("last", "last");
///
/// let specs = SignatureInspector::inspect(&signature).unwrap();
/// let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["opt", "another", "last"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    receiver: Option<String>,
    parameters: Vec<ParameterSpec>,
}

impl Signature {
    /// Signature of a method bound to a `self` receiver.
    pub fn method() -> Self {
        Self {
            receiver: Some("self".to_string()),
            parameters: Vec::new(),
        }
    }

    /// Signature of a free function, without receiver.
    pub fn function() -> Self {
        Self::default()
    }

    /// Append a parameter without default.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterSpec::required(name));
        self
    }

    /// Append a parameter with a default.
    pub fn param_default(mut self, name: impl Into<String>, default: impl Into<ParamValue>) -> Self {
        self.parameters.push(ParameterSpec::with_default(name, default));
        self
    }

    /// Name of the receiver, if this is a method signature.
    pub fn receiver(&self) -> Option<&str> {
        self.receiver.as_deref()
    }

    /// Declared parameters in declaration order, receiver excluded.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }
}

/// Anything that can hand out a [`Signature`].
///
/// Returning `None` marks the target as opaque; inspecting it fails.
pub trait Inspectable {
    /// Name used in diagnostics.
    fn target_name(&self) -> &str;

    /// The declared signature, if there is one.
    fn signature(&self) -> Option<&Signature>;
}

impl Inspectable for Signature {
    fn target_name(&self) -> &str {
        "<signature>"
    }

    fn signature(&self) -> Option<&Signature> {
        Some(self)
    }
}

/// Reads parameter specs out of an [`Inspectable`].
pub struct SignatureInspector;

impl SignatureInspector {
    /// Return the ordered parameter specs of `target`, receiver excluded.
    ///
    /// Names must be unique, non-empty and flag-safe: no dash (flags map
    /// dashes to underscores), no `=`, no whitespace.
    pub fn inspect(target: &dyn Inspectable) -> Result<Vec<ParameterSpec>, SignatureError> {
        let name = target.target_name();
        let signature = target
            .signature()
            .ok_or_else(|| SignatureError::opaque(name))?;

        let mut seen: HashSet<&str> = HashSet::new();
        if let Some(receiver) = signature.receiver() {
            seen.insert(receiver);
        }

        for spec in signature.parameters() {
            if !is_flag_safe(&spec.name) {
                return Err(SignatureError::invalid_name(name, &spec.name));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SignatureError::duplicate_parameter(name, &spec.name));
            }
        }

        Ok(signature.parameters().to_vec())
    }
}

fn is_flag_safe(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('-')
        && !name.contains('=')
        && !name.chars().any(char::is_whitespace)
}
