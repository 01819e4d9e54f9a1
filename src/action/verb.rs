//! Verb descriptors.

use crate::error::MissingArgumentError;
use crate::parser::BoundArguments;
use crate::signature::{Inspectable, Signature};

use super::help::HelpText;

/// Everything the dispatcher knows about one verb of an action.
///
/// # Example
///
/// ```
/// use director::action::VerbDescriptor;
/// use director::signature::Signature;
///
/// let verb = VerbDescriptor::new(
///     "verb",
///     Signature::method()
///         .param("opt")
///         .param_default("another", false)
///         .param_default("last", "last"),
/// )
/// .with_doc("An example verb.\n\n== help ==\nOptions:\n\topt:\tsome kind of options\n== end help ==")
/// .with_help("Options:\topt:\tsome kind of options");
///
/// assert_eq!(verb.summary(), "An example verb.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbDescriptor {
    name: String,
    signature: Option<Signature>,
    doc: String,
    help: Option<String>,
}

impl VerbDescriptor {
    /// Describe a verb with a declared signature.
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            signature: Some(signature),
            doc: String::new(),
            help: None,
        }
    }

    /// Describe a verb that exposes no signature.
    ///
    /// It can be listed and documented, but dispatching it fails at binding.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: None,
            doc: String::new(),
            help: None,
        }
    }

    /// Attach documentation. A region between `== help ==` and
    /// `== end help ==` is the verb's help block.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Attach a short help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Verb name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw documentation.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Short help text, if attached.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Parsed documentation.
    pub fn help_text(&self) -> HelpText {
        HelpText::parse(&self.doc)
    }

    /// One-line summary: first summary line of the doc, else the short help
    /// text's first line, else empty.
    pub fn summary(&self) -> String {
        let text = self.help_text();
        text.summary
            .first()
            .map(|line| line.trim().to_string())
            .or_else(|| {
                self.help
                    .as_deref()
                    .and_then(|h| h.lines().map(str::trim).find(|l| !l.is_empty()))
                    .map(str::to_string)
            })
            .unwrap_or_default()
    }

    /// Fail with the first declared parameter that has neither a default nor
    /// a bound value.
    pub fn check_required(&self, bound: &BoundArguments) -> Result<(), MissingArgumentError> {
        let Some(signature) = &self.signature else {
            return Ok(());
        };

        match signature
            .parameters()
            .iter()
            .find(|p| !p.has_default() && !bound.contains(&p.name))
        {
            Some(missing) => Err(MissingArgumentError {
                verb: self.name.clone(),
                parameter: missing.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Inspectable for VerbDescriptor {
    fn target_name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }
}
