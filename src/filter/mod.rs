//! Exception filters.
//!
//! A [`FilterChain`] turns errors raised by verbs into user-facing messages.
//! Each [`ExceptionFilter`] matches one concrete error type exactly and
//! prints its template on the diagnostic stream.
//!
//! # Example
//!
//! ```
//! use director::console::Console;
//! use director::filter::{ExceptionFilter, FilterChain};
//! use std::io;
//!
//! let mut chain = FilterChain::new();
//! chain
//!     .register(ExceptionFilter::new::<io::Error>("I/O failed: %s"))
//!     .unwrap();
//!
//! let (mut console, buffer) = Console::buffered();
//! let error = io::Error::new(io::ErrorKind::Other, "disk on fire");
//! assert_eq!(chain.execute_with(&error, &mut console), 1);
//! assert_eq!(buffer.contents(), "I/O failed: disk on fire\n");
//! ```

use crate::console::Console;
use std::any::{type_name, TypeId};
use std::error::Error;
use std::fmt;
use tracing::debug;

/// Placeholder replaced by the error's display text.
pub const PLACEHOLDER: &str = "%s";

/// A concrete error type a filter matches.
#[derive(Clone, Copy)]
pub struct ErrorKind {
    id: TypeId,
    name: &'static str,
    matches: fn(&(dyn Error + 'static)) -> bool,
}

impl ErrorKind {
    /// The kind of `E`.
    pub fn of<E: Error + 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: type_name::<E>(),
            matches: |error| error.is::<E>(),
        }
    }

    /// Full type name, e.g. `std::io::error::Error`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `error` is exactly of this kind.
    ///
    /// Wrapping types do not match the error they wrap.
    pub fn matches(&self, error: &(dyn Error + 'static)) -> bool {
        (self.matches)(error)
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Registering a second filter for an error kind.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("You can only have one filter for one exception: {kind}")]
pub struct DuplicateFilterError {
    /// Type name of the contested kind.
    pub kind: String,
}

/// Prints a message when it sees an error of its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionFilter {
    kind: ErrorKind,
    template: String,
}

impl ExceptionFilter {
    /// Filter for `E` printing `template`.
    ///
    /// Every `%s` in the template is replaced by the error's display text;
    /// without one the template is printed as is.
    pub fn new<E: Error + 'static>(template: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::of::<E>(),
            template: template.into(),
        }
    }

    /// Filter for `E` printing the error's display text.
    pub fn of<E: Error + 'static>() -> Self {
        Self::new::<E>(PLACEHOLDER)
    }

    /// Kind matched by this filter.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Message printed for `error`.
    pub fn render(&self, error: &dyn Error) -> String {
        if self.template.contains(PLACEHOLDER) {
            self.template.replace(PLACEHOLDER, &error.to_string())
        } else {
            self.template.clone()
        }
    }

    /// Print the message when `error` is of this filter's kind.
    ///
    /// Returns whether it matched.
    pub fn filter(&self, error: &(dyn Error + 'static), console: &mut Console) -> bool {
        if !self.kind.matches(error) {
            return false;
        }
        console.line(self.render(error));
        true
    }
}

/// Ordered filters, at most one per error kind.
#[derive(Clone, Debug, Default)]
pub struct FilterChain {
    filters: Vec<ExceptionFilter>,
}

impl FilterChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter.
    ///
    /// Fails when a filter for the same kind is already registered.
    pub fn register(&mut self, filter: ExceptionFilter) -> Result<(), DuplicateFilterError> {
        if self.filters.iter().any(|f| f.kind == filter.kind) {
            return Err(DuplicateFilterError {
                kind: filter.kind.name().to_string(),
            });
        }

        debug!(kind = filter.kind.name(), "Registered filter");
        self.filters.push(filter);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_filter(mut self, filter: ExceptionFilter) -> Result<Self, DuplicateFilterError> {
        self.register(filter)?;
        Ok(self)
    }

    /// Offer `error` to every filter on stderr.
    pub fn execute(&self, error: &(dyn Error + 'static)) -> usize {
        self.execute_with(error, &mut Console::stderr())
    }

    /// Offer `error` to every filter in registration order.
    ///
    /// Returns the number of filters that matched. Never fails.
    pub fn execute_with(&self, error: &(dyn Error + 'static), console: &mut Console) -> usize {
        let matched = self
            .filters
            .iter()
            .filter(|f| f.filter(error, console))
            .count();
        debug!(matched, "Filter chain executed");
        matched
    }

    /// Registered filters in order.
    pub fn filters(&self) -> &[ExceptionFilter] {
        &self.filters
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvocationError, MissingArgumentError};
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("wrapped: {0}")]
    struct Wrapper(#[source] io::Error);

    fn io_error() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "disk on fire")
    }

    #[test]
    fn test_filter_substitutes_placeholder() {
        let filter = ExceptionFilter::new::<io::Error>("I/O failed: %s");
        let (mut console, buffer) = Console::buffered();

        assert!(filter.filter(&io_error(), &mut console));
        assert_eq!(buffer.contents(), "I/O failed: disk on fire\n");
    }

    #[test]
    fn test_filter_without_placeholder() {
        let filter = ExceptionFilter::new::<io::Error>("Something broke");
        let (mut console, buffer) = Console::buffered();

        assert!(filter.filter(&io_error(), &mut console));
        assert_eq!(buffer.contents(), "Something broke\n");
    }

    #[test]
    fn test_filter_default_template() {
        let filter = ExceptionFilter::of::<io::Error>();
        assert_eq!(filter.template(), "%s");
        assert_eq!(filter.render(&io_error()), "disk on fire");
    }

    #[test]
    fn test_filter_ignores_other_kinds() {
        let filter = ExceptionFilter::new::<MissingArgumentError>("missing: %s");
        let (mut console, buffer) = Console::buffered();

        assert!(!filter.filter(&io_error(), &mut console));
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_filter_is_exact_match() {
        let filter = ExceptionFilter::new::<io::Error>("%s");
        let (mut console, _) = Console::buffered();
        assert!(!filter.filter(&Wrapper(io_error()), &mut console));
    }

    #[test]
    fn test_register_duplicate_kind() {
        let mut chain = FilterChain::new();
        chain.register(ExceptionFilter::new::<io::Error>("one")).unwrap();

        let error = chain
            .register(ExceptionFilter::new::<io::Error>("two"))
            .unwrap_err();
        assert!(error.kind.contains("io"));
        assert!(error
            .to_string()
            .starts_with("You can only have one filter for one exception"));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_execute_runs_every_filter_in_order() {
        let chain = FilterChain::new()
            .with_filter(ExceptionFilter::new::<MissingArgumentError>("missing"))
            .unwrap()
            .with_filter(ExceptionFilter::new::<io::Error>("io: %s"))
            .unwrap();

        let (mut console, buffer) = Console::buffered();
        assert_eq!(chain.execute_with(&io_error(), &mut console), 1);
        assert_eq!(buffer.contents(), "io: disk on fire\n");
    }

    #[test]
    fn test_execute_boxed_invocation_error() {
        let chain = FilterChain::new()
            .with_filter(ExceptionFilter::new::<io::Error>("io: %s"))
            .unwrap();
        let error: InvocationError = Box::new(io_error());

        let (mut console, buffer) = Console::buffered();
        assert_eq!(chain.execute_with(&*error, &mut console), 1);
        assert_eq!(buffer.contents(), "io: disk on fire\n");
    }

    #[test]
    fn test_execute_no_match() {
        let chain = FilterChain::new();
        let (mut console, buffer) = Console::buffered();
        assert_eq!(chain.execute_with(&io_error(), &mut console), 0);
        assert!(buffer.contents().is_empty());
        assert!(chain.is_empty());
    }
}
