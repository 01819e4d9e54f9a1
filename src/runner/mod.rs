//! Noun/verb dispatch.
//!
//! [`ActionRunner`] takes `argv` as `program noun verb [--flag[=value]]...`,
//! resolves the noun through a [`ModuleLocator`], binds the flags to the
//! verb's parameters and invokes it. Errors raised by the verb go to the
//! filter chain when one is given.
//!
//! # Example
//!
//! ```
//! use director::action::BaseAction;
//! use director::console::Console;
//! use director::locator::PluginRegistry;
//! use director::runner::{ActionRunner, ExitOutcome};
//!
//! let plugins = PluginRegistry::new()
//!     .with_action("base", || Box::new(BaseAction::new()))
//!     .unwrap();
//! let runner = ActionRunner::new(&plugins);
//!
//! let (mut console, buffer) = Console::buffered();
//! let outcome = runner
//!     .dispatch_with(&["prog", "base", "description"], None, &mut console)
//!     .unwrap();
//!
//! assert_eq!(outcome, ExitOutcome::Success);
//! assert!(buffer.contents().contains("Available verbs: description, help"));
//! ```

mod config;
mod error;

pub use config::{program_name, RunnerConfig, DEFAULT_APP_NAME, DEFAULT_LOG_LEVEL};
pub use error::DispatchError;

use crate::action::{is_builtin, run_builtin, Action, VerbDescriptor};
use crate::console::Console;
use crate::error::InvocationResult;
use crate::filter::FilterChain;
use crate::grammar::FlagGrammar;
use crate::locator::ModuleLocator;
use crate::parser::{ArgumentParser, BoundArguments};
use crate::signature::SignatureInspector;
use tracing::debug;

#[cfg(feature = "observability")]
use crate::observability::Logger;
#[cfg(feature = "observability")]
use tracing::warn;

/// Message printed when the noun or verb is missing.
pub const USAGE_HINT: &str = "Please give at least a noun and a verb.";

/// Steps of one dispatch, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchState {
    /// Checking that a noun and a verb were given.
    AwaitingNounVerb,
    /// Building the action and finding the verb.
    Resolving,
    /// Deriving the grammar and parsing flags.
    Binding,
    /// Running the verb between the action's hooks.
    Invoking,
    /// Offering the verb's error to the filter chain.
    Filtering,
    /// Verb completed.
    Done,
}

/// How a dispatch ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The verb ran. Exit code 0.
    Success,
    /// Noun or verb missing from the command line. Exit code 1.
    Usage,
    /// The verb failed and the filter chain reported it. Exit code 1.
    Failure,
}

impl ExitOutcome {
    /// Process exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Usage | Self::Failure => 1,
        }
    }

    /// Whether the verb ran.
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Terminate the process with [`exit_code`](Self::exit_code).
    pub fn exit(self) -> ! {
        std::process::exit(self.exit_code())
    }
}

/// Dispatches command lines to actions.
pub struct ActionRunner<'a> {
    locator: &'a dyn ModuleLocator,
    config: RunnerConfig,
    #[cfg(feature = "observability")]
    logger: Option<Logger>,
}

impl<'a> ActionRunner<'a> {
    /// Runner with default settings.
    pub fn new(locator: &'a dyn ModuleLocator) -> Self {
        Self::with_config(locator, RunnerConfig::default())
    }

    /// Runner with explicit settings.
    ///
    /// A dispatch log that cannot be opened is reported and skipped.
    pub fn with_config(locator: &'a dyn ModuleLocator, config: RunnerConfig) -> Self {
        #[cfg(feature = "observability")]
        let logger = config
            .dispatch_log
            .as_deref()
            .and_then(|path| match Logger::new(Some(path)) {
                Ok(logger) => Some(logger),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Dispatch log disabled");
                    None
                }
            });

        Self {
            locator,
            config,
            #[cfg(feature = "observability")]
            logger,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Dispatch `argv` with diagnostics on stderr.
    pub fn dispatch<S: AsRef<str>>(
        &self,
        argv: &[S],
        filters: Option<&FilterChain>,
    ) -> Result<ExitOutcome, DispatchError> {
        self.dispatch_with(argv, filters, &mut Console::stderr())
    }

    /// Dispatch `argv`, writing diagnostics to `console`.
    ///
    /// `argv[0]` is the program name. Resolution and binding errors are
    /// returned as is. A verb error yields [`ExitOutcome::Failure`] once the
    /// chain has seen it, or [`DispatchError::Invocation`] without a chain.
    pub fn dispatch_with<S: AsRef<str>>(
        &self,
        argv: &[S],
        filters: Option<&FilterChain>,
        console: &mut Console,
    ) -> Result<ExitOutcome, DispatchError> {
        let args: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();

        enter(DispatchState::AwaitingNounVerb);
        let (noun, verb, tokens) = match args.as_slice() {
            [_, noun, verb, tokens @ ..] => (*noun, *verb, tokens),
            _ => {
                self.list_nouns(console);
                console.line(USAGE_HINT);
                return Ok(ExitOutcome::Usage);
            }
        };

        enter(DispatchState::Resolving);
        let mut action = self
            .locator
            .locate(noun)
            .ok_or_else(|| DispatchError::noun_not_found(noun))?;
        let descriptor = action
            .verbs()
            .get(verb)
            .cloned()
            .ok_or_else(|| DispatchError::verb_not_found(noun, verb))?;
        debug!(noun, verb, "Resolved");

        enter(DispatchState::Binding);
        let bound = Self::bind(&descriptor, tokens)?;
        #[cfg(feature = "observability")]
        self.record(|logger| logger.log_dispatch(noun, verb, &bound));

        enter(DispatchState::Invoking);
        let usage_prefix = format!("{} {}", self.config.app_name, noun);
        match invoke(action.as_mut(), &descriptor, &bound, &usage_prefix, console) {
            Ok(()) => {
                #[cfg(feature = "observability")]
                self.record(|logger| logger.log_completion(noun, verb));
                enter(DispatchState::Done);
                Ok(ExitOutcome::Success)
            }
            Err(error) => match filters {
                Some(chain) => {
                    enter(DispatchState::Filtering);
                    let matched = chain.execute_with(&*error, console);
                    #[cfg(feature = "observability")]
                    self.record(|logger| logger.log_failure(noun, verb, &*error, matched));
                    debug!(noun, verb, matched, "Verb failed");
                    Ok(ExitOutcome::Failure)
                }
                None => {
                    #[cfg(feature = "observability")]
                    self.record(|logger| logger.log_failure(noun, verb, &*error, 0));
                    debug!(noun, verb, "Verb failed without filters");
                    Err(DispatchError::Invocation(error))
                }
            },
        }
    }

    /// Dispatch `argv` and exit the process.
    ///
    /// Errors that are not filtered are printed before exiting with code 1.
    pub fn run<S: AsRef<str>>(&self, argv: &[S], filters: Option<&FilterChain>) -> ! {
        let mut console = Console::stderr();
        match self.dispatch_with(argv, filters, &mut console) {
            Ok(outcome) => outcome.exit(),
            Err(error) => {
                console.line(&error);
                ExitOutcome::Failure.exit()
            }
        }
    }

    /// Bind `tokens` to the parameters of `verb`.
    pub fn bind<S: AsRef<str>>(
        verb: &VerbDescriptor,
        tokens: &[S],
    ) -> Result<BoundArguments, DispatchError> {
        let specs = SignatureInspector::inspect(verb)?;
        let grammar = FlagGrammar::build(&specs);
        Ok(ArgumentParser::parse(&grammar, tokens)?)
    }

    fn list_nouns(&self, console: &mut Console) {
        console.err("Available nouns:", false);
        for noun in self.locator.nouns() {
            console.err(noun, false);
        }
        console.blank();
    }

    #[cfg(feature = "observability")]
    fn record(&self, write: impl FnOnce(&Logger) -> anyhow::Result<()>) {
        if let Some(logger) = &self.logger {
            if let Err(e) = write(logger) {
                warn!(error = %e, "Dispatch log write failed");
            }
        }
    }
}

fn enter(state: DispatchState) {
    debug!(?state, "Dispatch state");
}

/// Run `verb` between the action's `open` and `close` hooks.
///
/// `close` runs on every path, including a failing `open`.
fn invoke(
    action: &mut dyn Action,
    verb: &VerbDescriptor,
    bound: &BoundArguments,
    usage_prefix: &str,
    console: &mut Console,
) -> InvocationResult {
    let mut action = scopeguard::guard(action, |action| action.close());
    action.open()?;
    verb.check_required(bound)?;

    if is_builtin(verb.name()) {
        run_builtin(console, &**action, verb.name(), bound, usage_prefix)
    } else {
        action.invoke(verb.name(), bound)
    }
}
