//! Noun resolution.
//!
//! A [`ModuleLocator`] turns the noun typed on the command line into a fresh
//! action instance. [`PluginRegistry`] is the stock implementation: a map of
//! nouns to factories, filled in by the application at startup.

use crate::action::Action;
use crate::error::{is_public_name, RegistryError};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Builds a fresh action for one dispatch.
pub type ActionFactory = Box<dyn Fn() -> Box<dyn Action> + Send + Sync>;

/// Resolves nouns to actions.
pub trait ModuleLocator {
    /// Every noun this locator can resolve, sorted.
    fn nouns(&self) -> Vec<String>;

    /// Instantiate the action behind `noun`, `None` when it is unknown.
    fn locate(&self, noun: &str) -> Option<Box<dyn Action>>;
}

/// Nouns mapped to action factories.
///
/// # Example
///
/// ```
/// use director::action::BaseAction;
/// use director::locator::{ModuleLocator, PluginRegistry};
///
/// let registry = PluginRegistry::new()
///     .with_action("base", || Box::new(BaseAction::new()))
///     .unwrap();
///
/// assert_eq!(registry.nouns(), ["base"]);
/// assert!(registry.locate("base").is_some());
/// assert!(registry.locate("missing").is_none());
/// ```
#[derive(Default)]
pub struct PluginRegistry {
    factories: BTreeMap<String, ActionFactory>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for `noun`.
    ///
    /// Returns an error if the noun is taken or cannot be typed.
    pub fn register<F>(&mut self, noun: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Box<dyn Action> + Send + Sync + 'static,
    {
        let noun = noun.into();
        if !is_public_name(&noun) {
            return Err(RegistryError::invalid_name(noun));
        }
        if self.factories.contains_key(&noun) {
            return Err(RegistryError::duplicate_noun(noun));
        }

        debug!(noun = %noun, "Registered action");
        self.factories.insert(noun, Box::new(factory));
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_action<F>(mut self, noun: impl Into<String>, factory: F) -> Result<Self, RegistryError>
    where
        F: Fn() -> Box<dyn Action> + Send + Sync + 'static,
    {
        self.register(noun, factory)?;
        Ok(self)
    }

    /// Check if a noun is registered.
    pub fn contains(&self, noun: &str) -> bool {
        self.factories.contains_key(noun)
    }

    /// Number of registered nouns.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl ModuleLocator for PluginRegistry {
    fn nouns(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    fn locate(&self, noun: &str) -> Option<Box<dyn Action>> {
        self.factories.get(noun).map(|factory| factory())
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("nouns", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
