//! Configuration from the environment.
//!
//! Settings come from `DIRECTOR_*` variables, optionally seeded from an
//! explicitly named `.env` file.
//!
//! # Example
//!
//! ```no_run
//! use director::config::EnvironmentLoader;
//! use std::path::Path;
//!
//! let env = EnvironmentLoader::new(Some(Path::new(".env")));
//! let config = env.runner_config(std::env::args().next().as_deref());
//!
//! println!("Usage lines name {}", config.app_name);
//! ```

pub mod environment;

pub use self::environment::{EnvironmentLoader, APP_NAME_VAR, DISPATCH_LOG_VAR, LOG_VAR};
