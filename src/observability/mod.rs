//! Observability for dispatches.
//!
//! Diagnostics inside the library go through `tracing`. Binaries install a
//! subscriber with [`init_tracing`]; a [`Logger`] additionally keeps a
//! markdown record of every dispatch.
//!
//! # Example
//!
//! ```no_run
//! use director::observability::{init_tracing, Logger};
//! use director::parser::BoundArguments;
//!
//! init_tracing("debug");
//!
//! let logger = Logger::new(None).unwrap();
//! logger.log_dispatch("simpleaction", "verb", &BoundArguments::new()).unwrap();
//! logger.log_completion("simpleaction", "verb").unwrap();
//! ```

pub mod logger;
mod subscriber;

pub use logger::Logger;
pub use subscriber::{init_tracing, DEFAULT_DIRECTIVE};
