//! Actions: the plugin units verbs live on.
//!
//! An action declares its verbs in a [`VerbRegistry`] when it is built and
//! dispatches them in [`Action::invoke`]. Every registry starts with the
//! built-in `help` and `description` verbs, which the runner answers itself.
//!
//! # Example
//!
//! ```
//! use director::action::{Action, VerbDescriptor, VerbRegistry};
//! use director::error::{InvocationResult, UnknownVerbError};
//! use director::parser::BoundArguments;
//! use director::signature::Signature;
//!
//! struct Greeter {
//!     verbs: VerbRegistry,
//! }
//!
//! impl Greeter {
//!     fn new() -> Self {
//!         let verbs = VerbRegistry::new()
//!             .with_verb(
//!                 VerbDescriptor::new("hello", Signature::method().param_default("name", "world"))
//!                     .with_doc("Say hello."),
//!             )
//!             .unwrap();
//!         Self { verbs }
//!     }
//! }
//!
//! impl Action for Greeter {
//!     fn description(&self) -> &str {
//!         "Greets people"
//!     }
//!
//!     fn verbs(&self) -> &VerbRegistry {
//!         &self.verbs
//!     }
//!
//!     fn invoke(&mut self, verb: &str, args: &BoundArguments) -> InvocationResult {
//!         match verb {
//!             "hello" => {
//!                 println!("hello {}", args.get_str("name").unwrap_or_default());
//!                 Ok(())
//!             }
//!             _ => Err(UnknownVerbError::new(verb).into()),
//!         }
//!     }
//! }
//!
//! assert_eq!(Greeter::new().verbs().names(), ["description", "hello", "help"]);
//! ```

pub mod help;
mod registry;
mod verb;

pub use help::{HelpText, HELP_END, HELP_START};
pub use registry::{is_builtin, VerbRegistry, DESCRIPTION_VERB, HELP_VERB};
pub use verb::VerbDescriptor;

use crate::console::Console;
use crate::error::{InvocationResult, UnknownVerbError};
use crate::parser::BoundArguments;

/// Description shown for actions that do not provide one.
pub const DEFAULT_DESCRIPTION: &str = "Base action class";

/// A plugin unit exposing verbs.
///
/// The runner calls [`open`](Action::open) before and
/// [`close`](Action::close) after every invocation, on every exit path.
pub trait Action {
    /// One-line description used by `help` and `description`.
    fn description(&self) -> &str {
        DEFAULT_DESCRIPTION
    }

    /// The action's verbs, built-ins included.
    fn verbs(&self) -> &VerbRegistry;

    /// Run `verb` with its bound arguments.
    ///
    /// Only called for verbs present in [`verbs`](Action::verbs) that are
    /// not built-in.
    fn invoke(&mut self, verb: &str, args: &BoundArguments) -> InvocationResult;

    /// Startup hook, run before the verb.
    fn open(&mut self) -> InvocationResult {
        Ok(())
    }

    /// Shutdown hook, run after the verb whatever its outcome.
    fn close(&mut self) {}
}

/// An action with only the built-in verbs.
#[derive(Clone, Debug, Default)]
pub struct BaseAction {
    verbs: VerbRegistry,
}

impl BaseAction {
    /// Create the action.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Action for BaseAction {
    fn verbs(&self) -> &VerbRegistry {
        &self.verbs
    }

    fn invoke(&mut self, verb: &str, _args: &BoundArguments) -> InvocationResult {
        Err(UnknownVerbError::new(verb).into())
    }
}

/// Answer a built-in verb on behalf of `action`.
///
/// `usage_prefix` is `"<app> <noun>"`. `help --verb=<name>` with an unknown
/// name fails with [`UnknownVerbError`].
pub fn run_builtin(
    console: &mut Console,
    action: &dyn Action,
    verb: &str,
    args: &BoundArguments,
    usage_prefix: &str,
) -> InvocationResult {
    match verb {
        HELP_VERB => match args.get_str("verb") {
            Some(target) => {
                let descriptor = action
                    .verbs()
                    .get(target)
                    .ok_or_else(|| UnknownVerbError::new(target))?;
                help::verb_help(console, descriptor, usage_prefix);
                Ok(())
            }
            None => {
                help::action_help(console, action, usage_prefix);
                Ok(())
            }
        },
        DESCRIPTION_VERB => {
            help::description(console, action);
            Ok(())
        }
        other => Err(UnknownVerbError::new(other).into()),
    }
}
