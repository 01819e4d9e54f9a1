//! Per-action verb registry.

use crate::error::{is_public_name, RegistryError};
use crate::signature::{ParamValue, Signature};
use std::collections::BTreeMap;
use tracing::debug;

use super::VerbDescriptor;

/// Name of the built-in help verb.
pub const HELP_VERB: &str = "help";

/// Name of the built-in description verb.
pub const DESCRIPTION_VERB: &str = "description";

const HELP_DOC: &str = "Detailed help information about the action.

== help ==

Options:
\tverb:\tverb to get help on

Example:
\tmyapp list help --verb=help
== end help ==

Shared by every action.";

const DESCRIPTION_DOC: &str = "Quick blurb about the action.

== help ==

Options:
\tNone

Example:
\tmyapp list description
== end help ==";

/// Whether `name` is one of the verbs every action carries.
pub fn is_builtin(name: &str) -> bool {
    name == HELP_VERB || name == DESCRIPTION_VERB
}

/// The verbs of one action, keyed and listed by name.
///
/// A new registry already holds the built-in `help` and `description`
/// verbs; actions add their own at construction.
///
/// # Example
///
/// ```
/// use director::action::{VerbDescriptor, VerbRegistry};
/// use director::signature::Signature;
///
/// let registry = VerbRegistry::new()
///     .with_verb(VerbDescriptor::new("verb", Signature::method().param("opt")))
///     .unwrap();
///
/// assert_eq!(registry.names(), ["description", "help", "verb"]);
/// ```
#[derive(Clone, Debug)]
pub struct VerbRegistry {
    verbs: BTreeMap<String, VerbDescriptor>,
}

impl VerbRegistry {
    /// Create a registry holding only the built-in verbs.
    pub fn new() -> Self {
        let mut verbs = BTreeMap::new();
        verbs.insert(
            HELP_VERB.to_string(),
            VerbDescriptor::new(
                HELP_VERB,
                Signature::method().param_default("verb", ParamValue::None),
            )
            .with_doc(HELP_DOC),
        );
        verbs.insert(
            DESCRIPTION_VERB.to_string(),
            VerbDescriptor::new(DESCRIPTION_VERB, Signature::method()).with_doc(DESCRIPTION_DOC),
        );
        Self { verbs }
    }

    /// Register a verb.
    ///
    /// Fails when the name is taken, belongs to a built-in, or is not a
    /// public name (empty, underscore-prefixed, dashed or with whitespace).
    pub fn register(&mut self, verb: VerbDescriptor) -> Result<(), RegistryError> {
        let name = verb.name();
        if !is_public_name(name) {
            return Err(RegistryError::invalid_name(name));
        }
        if is_builtin(name) {
            return Err(RegistryError::reserved_verb(name));
        }
        if self.verbs.contains_key(name) {
            return Err(RegistryError::duplicate_verb(name));
        }

        debug!(verb = %name, "Registered verb");
        self.verbs.insert(name.to_string(), verb);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_verb(mut self, verb: VerbDescriptor) -> Result<Self, RegistryError> {
        self.register(verb)?;
        Ok(self)
    }

    /// Look a verb up.
    pub fn get(&self, name: &str) -> Option<&VerbDescriptor> {
        self.verbs.get(name)
    }

    /// Whether the verb exists.
    pub fn contains(&self, name: &str) -> bool {
        self.verbs.contains_key(name)
    }

    /// Verb names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.verbs.keys().map(|s| s.as_str()).collect()
    }

    /// Verbs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &VerbDescriptor> {
        self.verbs.values()
    }

    /// Number of verbs, built-ins included.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Always false: built-ins are always present.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl Default for VerbRegistry {
    fn default() -> Self {
        Self::new()
    }
}
