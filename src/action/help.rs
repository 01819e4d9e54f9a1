//! Help rendering for actions.
//!
//! A verb's documentation may carry a help block delimited by two literal
//! marker lines:
//!
//! ```text
//! Detailed help information about the action.
//!
//! == help ==
//! Options:
//!     verb:   verb to get help on
//! == end help ==
//!
//! Anything else is not shown.
//! ```
//!
//! Lines before the first blank line (outside the block) form the summary.
//! Both are printed verbatim; everything else stays private to the author.

use crate::console::Console;
use crate::grammar::FlagGrammar;
use crate::signature::SignatureInspector;

use super::{Action, VerbDescriptor};

/// Marker line opening a help block.
pub const HELP_START: &str = "== help ==";

/// Marker line closing a help block.
pub const HELP_END: &str = "== end help ==";

/// Documentation split into summary and help block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpText {
    /// Lines before the first blank line, outside the help block.
    pub summary: Vec<String>,
    /// Lines between the markers.
    pub block: Vec<String>,
}

impl HelpText {
    /// Split `doc` into summary and help block.
    ///
    /// Leading blank lines are skipped and each line loses its leading
    /// four-space indentation groups; tabs are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use director::action::HelpText;
    ///
    /// let text = HelpText::parse("Summary.\n\n== help ==\n\tverb:\tverb to get help on\n== end help ==\nhidden");
    /// assert_eq!(text.summary, ["Summary."]);
    /// assert_eq!(text.block, ["\tverb:\tverb to get help on"]);
    /// ```
    pub fn parse(doc: &str) -> Self {
        let mut text = HelpText::default();
        let mut in_summary = true;
        let mut in_help = false;

        for line in doc
            .lines()
            .map(dedent)
            .skip_while(|line| line.trim().is_empty())
        {
            if line.trim().is_empty() && !in_help {
                in_summary = false;
            }

            if line.contains(HELP_START) {
                in_help = true;
            } else if line.contains(HELP_END) {
                in_help = false;
            } else if in_help {
                text.block.push(line.to_string());
            } else if in_summary {
                text.summary.push(line.to_string());
            }
        }

        text
    }

    /// Whether there is nothing to print.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.block.is_empty()
    }
}

fn dedent(mut line: &str) -> &str {
    while let Some(rest) = line.strip_prefix("    ") {
        line = rest;
    }
    line
}

/// Help for one verb: summary, help block, then the usage line derived from
/// its signature.
pub fn verb_help(console: &mut Console, verb: &VerbDescriptor, usage_prefix: &str) {
    let text = verb.help_text();
    for line in text.summary.iter().chain(text.block.iter()) {
        console.line(line);
    }

    if text.is_empty() {
        if let Some(help) = verb.help() {
            console.line(help);
        }
    }

    if let Ok(specs) = SignatureInspector::inspect(verb) {
        let usage = FlagGrammar::build(&specs).usage(format!("{} {}", usage_prefix, verb.name()));
        console.line(usage.trim_end());
    }
}

/// Help for a whole action: usage, description, one line per verb.
pub fn action_help(console: &mut Console, action: &dyn Action, usage_prefix: &str) {
    let heading = console.bold("Usage:");
    console.line(format!("{} {} [verb] [--opt=val]...", heading, usage_prefix));
    console.line(action.description());
    console.blank();

    for verb in action.verbs().iter() {
        let summary = verb.summary();
        let name = console.bold(verb.name());
        if summary.is_empty() {
            console.line(format!("{} -", name));
        } else {
            console.line(format!("{} - {}", name, summary));
        }
    }
}

/// Quick blurb: description plus the list of verbs.
pub fn description(console: &mut Console, action: &dyn Action) {
    console.line(format!(
        "{}. Available verbs: {}",
        action.description(),
        action.verbs().names().join(", ")
    ));
}
