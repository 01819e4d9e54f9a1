//! Director - command line plugin dispatch
//!
//! Director runs command lines of the form
//!
//! ```text
//! program <noun> <verb> [--flag | --flag=value]...
//! ```
//!
//! The noun names an [`Action`](action::Action) plugin, the verb one of its
//! operations, and the flags bind to the verb's declared parameters. Each
//! verb's flag grammar is derived from its [`Signature`](signature::Signature):
//!
//! - **`signature`** - parameter descriptors and their inspection
//! - **`grammar`** - one long flag per parameter, kind inferred from the default
//! - **`parser`** - token parsing into bound arguments
//! - **`action`** - the plugin trait, verb registry and built-in `help`/`description`
//! - **`locator`** - noun to action resolution
//! - **`runner`** - the dispatch state machine
//! - **`filter`** - turning verb errors into user-facing messages
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! director = { version = "1.1", features = ["config"] }
//! # Or everything:
//! director = { version = "1.1", features = ["all"] }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use director::prelude::*;
//! use std::io;
//!
//! struct Simpleaction {
//!     verbs: VerbRegistry,
//! }
//!
//! impl Simpleaction {
//!     fn new() -> Self {
//!         let verbs = VerbRegistry::new()
//!             .with_verb(
//!                 VerbDescriptor::new(
//!                     "verb",
//!                     Signature::method()
//!                         .param("opt")
//!                         .param_default("another", false)
//!                         .param_default("last", "last"),
//!                 )
//!                 .with_doc("An example verb.\n\n== help ==\n\topt:\tsome kind of options\n== end help =="),
//!             )
//!             .unwrap();
//!         Self { verbs }
//!     }
//! }
//!
//! impl Action for Simpleaction {
//!     fn description(&self) -> &str {
//!         "A simple action"
//!     }
//!
//!     fn verbs(&self) -> &VerbRegistry {
//!         &self.verbs
//!     }
//!
//!     fn invoke(&mut self, verb: &str, args: &BoundArguments) -> InvocationResult {
//!         match verb {
//!             "verb" => {
//!                 let opt = args.get_str("opt").unwrap_or_default();
//!                 if opt.is_empty() {
//!                     return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty opt").into());
//!                 }
//!                 println!("{}", opt);
//!                 Ok(())
//!             }
//!             _ => Err(UnknownVerbError::new(verb).into()),
//!         }
//!     }
//! }
//!
//! let plugins = PluginRegistry::new()
//!     .with_action("simpleaction", || Box::new(Simpleaction::new()))
//!     .unwrap();
//! let filters = FilterChain::new()
//!     .with_filter(ExceptionFilter::new::<io::Error>("I/O failed: %s"))
//!     .unwrap();
//!
//! let argv: Vec<String> = std::env::args().collect();
//! ActionRunner::new(&plugins).run(&argv, Some(&filters));
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod console;
pub mod error;
pub mod filter;
pub mod grammar;
pub mod locator;
pub mod parser;
pub mod runner;
pub mod signature;

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

/// Observability utilities (enabled with the `observability` feature)
#[cfg(feature = "observability")]
pub mod observability;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, BaseAction, VerbDescriptor, VerbRegistry};
    pub use crate::console::Console;
    pub use crate::error::{
        InvocationError, InvocationResult, MissingArgumentError, UnknownVerbError,
    };
    pub use crate::filter::{ExceptionFilter, FilterChain};
    pub use crate::locator::{ModuleLocator, PluginRegistry};
    pub use crate::parser::BoundArguments;
    pub use crate::runner::{ActionRunner, DispatchError, ExitOutcome, RunnerConfig};
    pub use crate::signature::{ParamValue, Signature};

    #[cfg(feature = "config")]
    pub use crate::config::EnvironmentLoader;

    #[cfg(feature = "observability")]
    pub use crate::observability::{init_tracing, Logger};
}
