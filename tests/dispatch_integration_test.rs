//! End-to-end dispatch tests against a small plugin set.

use director::prelude::*;
use std::io;
use std::sync::{Arc, Mutex};

const VERB_DOC: &str = "
    An example verb.

    == help ==
    Options:
    \topt:\tsome kind of options

    Example:
    \tprog simpleaction verb --opt=value
    == end help ==

    Implementation notes stay out of help.
    ";

#[derive(Clone, Default)]
struct Journal {
    calls: Arc<Mutex<Vec<String>>>,
    bound: Arc<Mutex<Option<BoundArguments>>>,
}

impl Journal {
    fn push(&self, entry: &str) {
        self.calls.lock().unwrap().push(entry.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn bound(&self) -> Option<BoundArguments> {
        self.bound.lock().unwrap().clone()
    }
}

struct Simpleaction {
    verbs: VerbRegistry,
    journal: Journal,
    fail_open: bool,
}

impl Simpleaction {
    fn new(journal: Journal) -> Self {
        let verbs = VerbRegistry::new()
            .with_verb(
                VerbDescriptor::new(
                    "verb",
                    Signature::method()
                        .param("opt")
                        .param_default("another", false)
                        .param_default("last", "last"),
                )
                .with_doc(VERB_DOC),
            )
            .unwrap()
            .with_verb(
                VerbDescriptor::new("ioerror", Signature::method()).with_help("Always fails"),
            )
            .unwrap()
            .with_verb(VerbDescriptor::new(
                "toggle",
                Signature::method()
                    .param_default("color", true)
                    .param_default("some_flag", false),
            ))
            .unwrap();

        Self {
            verbs,
            journal,
            fail_open: false,
        }
    }

    fn failing_open(journal: Journal) -> Self {
        Self {
            fail_open: true,
            ..Self::new(journal)
        }
    }
}

impl Action for Simpleaction {
    fn description(&self) -> &str {
        "A simple action"
    }

    fn verbs(&self) -> &VerbRegistry {
        &self.verbs
    }

    fn invoke(&mut self, verb: &str, args: &BoundArguments) -> InvocationResult {
        self.journal.push(verb);
        *self.journal.bound.lock().unwrap() = Some(args.clone());

        match verb {
            "verb" | "toggle" => Ok(()),
            "ioerror" => Err(io::Error::new(io::ErrorKind::Other, "disk on fire").into()),
            _ => Err(UnknownVerbError::new(verb).into()),
        }
    }

    fn open(&mut self) -> InvocationResult {
        self.journal.push("open");
        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::Other, "lock held").into());
        }
        Ok(())
    }

    fn close(&mut self) {
        self.journal.push("close");
    }
}

struct Harness {
    plugins: PluginRegistry,
    journal: Journal,
}

impl Harness {
    fn new() -> Self {
        Self::build(Simpleaction::new)
    }

    fn with_failing_open() -> Self {
        Self::build(Simpleaction::failing_open)
    }

    fn build(make: fn(Journal) -> Simpleaction) -> Self {
        let journal = Journal::default();
        let shared = journal.clone();
        let plugins = PluginRegistry::new()
            .with_action("simpleaction", move || Box::new(make(shared.clone())))
            .unwrap()
            .with_action("base", || Box::new(BaseAction::new()))
            .unwrap();
        Self { plugins, journal }
    }

    fn dispatch(
        &self,
        argv: &[&str],
        filters: Option<&FilterChain>,
    ) -> (Result<ExitOutcome, DispatchError>, String) {
        let runner =
            ActionRunner::with_config(&self.plugins, RunnerConfig::default().with_app_name("prog"));
        let (mut console, buffer) = Console::buffered();
        let result = runner.dispatch_with(argv, filters, &mut console);
        (result, buffer.contents())
    }
}

fn io_filters() -> FilterChain {
    FilterChain::new()
        .with_filter(ExceptionFilter::new::<io::Error>("I/O failed: %s"))
        .unwrap()
}

#[test]
fn test_end_to_end_binding() {
    let harness = Harness::new();
    let (result, _) = harness.dispatch(
        &["prog", "simpleaction", "verb", "--opt=value", "--another"],
        None,
    );

    assert_eq!(result.unwrap(), ExitOutcome::Success);

    let bound = harness.journal.bound().unwrap();
    assert_eq!(bound.get_str("opt"), Some("value"));
    assert_eq!(bound.get_bool("another"), Some(true));
    assert_eq!(bound.get_str("last"), Some("last"));
    assert_eq!(bound.names().collect::<Vec<_>>(), ["opt", "another", "last"]);
}

#[test]
fn test_defaults_applied() {
    let harness = Harness::new();
    let (result, _) = harness.dispatch(&["prog", "simpleaction", "verb", "--opt=x"], None);
    assert!(result.unwrap().is_success());

    let bound = harness.journal.bound().unwrap();
    assert_eq!(bound.get_bool("another"), Some(false));
    assert_eq!(bound.get_str("last"), Some("last"));
}

#[test]
fn test_repeated_flag_last_wins_and_value_keeps_equals() {
    let harness = Harness::new();
    let (result, _) = harness.dispatch(
        &[
            "prog",
            "simpleaction",
            "verb",
            "--opt=first",
            "--opt=a=b",
            "--last=other",
        ],
        None,
    );
    assert!(result.is_ok());

    let bound = harness.journal.bound().unwrap();
    assert_eq!(bound.get_str("opt"), Some("a=b"));
    assert_eq!(bound.get_str("last"), Some("other"));
}

#[test]
fn test_boolean_kinds() {
    let harness = Harness::new();
    let (result, _) = harness.dispatch(
        &["prog", "simpleaction", "toggle", "--color", "--some-flag"],
        None,
    );
    assert!(result.is_ok());

    let bound = harness.journal.bound().unwrap();
    assert_eq!(bound.get_bool("color"), Some(false));
    assert_eq!(bound.get_bool("some_flag"), Some(true));
}

#[test]
fn test_explicit_boolean_values() {
    let harness = Harness::new();
    let (result, _) = harness.dispatch(
        &["prog", "simpleaction", "toggle", "--color=yes", "--some-flag=off"],
        None,
    );
    assert!(result.is_ok());

    let bound = harness.journal.bound().unwrap();
    assert_eq!(bound.get_bool("color"), Some(true));
    assert_eq!(bound.get_bool("some_flag"), Some(false));

    let (result, _) = harness.dispatch(&["prog", "simpleaction", "toggle", "--color=maybe"], None);
    assert!(matches!(
        result,
        Err(DispatchError::Parse(director::parser::ParseError::InvalidBoolean { .. }))
    ));
}

#[test]
fn test_missing_noun_and_verb() {
    let harness = Harness::new();
    let (result, out) = harness.dispatch(&["prog"], None);

    let outcome = result.unwrap();
    assert_eq!(outcome, ExitOutcome::Usage);
    assert_eq!(outcome.exit_code(), 1);
    assert!(out.contains("Available nouns: base simpleaction"));
    assert!(out.ends_with("Please give at least a noun and a verb.\n"));
    assert!(harness.journal.calls().is_empty());
}

#[test]
fn test_filtered_error() {
    let harness = Harness::new();
    let filters = io_filters();
    let (result, out) = harness.dispatch(&["prog", "simpleaction", "ioerror"], Some(&filters));

    let outcome = result.unwrap();
    assert_eq!(outcome, ExitOutcome::Failure);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(out, "I/O failed: disk on fire\n");
}

#[test]
fn test_unfiltered_error_propagates() {
    let harness = Harness::new();
    let (result, out) = harness.dispatch(&["prog", "simpleaction", "ioerror"], None);

    match result {
        Err(DispatchError::Invocation(error)) => {
            let io_error = error.downcast_ref::<io::Error>().unwrap();
            assert_eq!(io_error.to_string(), "disk on fire");
        }
        other => panic!("expected invocation error, got {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn test_unmatched_filter_still_fails() {
    let harness = Harness::new();
    let filters = FilterChain::new()
        .with_filter(ExceptionFilter::new::<MissingArgumentError>("missing: %s"))
        .unwrap();
    let (result, out) = harness.dispatch(&["prog", "simpleaction", "ioerror"], Some(&filters));

    assert_eq!(result.unwrap(), ExitOutcome::Failure);
    assert!(out.is_empty());
}

#[test]
fn test_missing_required_argument_is_filterable() {
    let harness = Harness::new();
    let filters = io_filters()
        .with_filter(ExceptionFilter::new::<MissingArgumentError>("Missing option: %s"))
        .unwrap();
    let (result, out) = harness.dispatch(&["prog", "simpleaction", "verb"], Some(&filters));

    assert_eq!(result.unwrap(), ExitOutcome::Failure);
    assert_eq!(out, "Missing option: verb() missing required argument: 'opt'\n");
    assert_eq!(harness.journal.calls(), ["open", "close"]);
}

#[test]
fn test_close_runs_on_success_and_failure() {
    let harness = Harness::new();

    harness.dispatch(&["prog", "simpleaction", "verb", "--opt=x"], None).0.unwrap();
    assert_eq!(harness.journal.calls(), ["open", "verb", "close"]);

    let _ = harness.dispatch(&["prog", "simpleaction", "ioerror"], None);
    assert_eq!(
        harness.journal.calls(),
        ["open", "verb", "close", "open", "ioerror", "close"]
    );
}

#[test]
fn test_open_failure_skips_verb_and_is_filtered() {
    let harness = Harness::with_failing_open();
    let filters = io_filters();
    let (result, out) = harness.dispatch(
        &["prog", "simpleaction", "verb", "--opt=x"],
        Some(&filters),
    );

    assert_eq!(result.unwrap(), ExitOutcome::Failure);
    assert_eq!(out, "I/O failed: lock held\n");
    assert_eq!(harness.journal.calls(), ["open", "close"]);
    assert!(harness.journal.bound().is_none());
}

#[test]
fn test_open_failure_without_filters_propagates() {
    let harness = Harness::with_failing_open();
    let (result, _) = harness.dispatch(&["prog", "simpleaction", "toggle"], None);

    let error = result.unwrap_err();
    let io_error = error.invocation().unwrap().downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_error.to_string(), "lock held");
    assert_eq!(harness.journal.calls(), ["open", "close"]);
}

#[test]
fn test_unknown_noun_and_verb() {
    let harness = Harness::new();

    let (result, _) = harness.dispatch(&["prog", "nothing", "verb"], None);
    assert!(matches!(result, Err(DispatchError::NounNotFound { .. })));

    let (result, _) = harness.dispatch(&["prog", "simpleaction", "asdasd"], None);
    assert!(matches!(result, Err(DispatchError::VerbNotFound { .. })));
    assert!(harness.journal.calls().is_empty());
}

#[test]
fn test_parse_errors_do_not_invoke() {
    let harness = Harness::new();

    let (result, _) = harness.dispatch(&["prog", "simpleaction", "verb", "opt=value"], None);
    assert!(matches!(result, Err(DispatchError::Parse(_))));

    let (result, _) = harness.dispatch(&["prog", "simpleaction", "verb", "--bogus=1"], None);
    assert!(matches!(result, Err(DispatchError::Parse(_))));

    let (result, _) = harness.dispatch(&["prog", "simpleaction", "verb", "--opt"], None);
    assert!(matches!(result, Err(DispatchError::Parse(_))));

    assert!(harness.journal.calls().is_empty());
}

#[test]
fn test_help_lists_verbs() {
    let harness = Harness::new();
    let (result, out) = harness.dispatch(&["prog", "simpleaction", "help"], None);

    assert!(result.unwrap().is_success());
    assert!(out.contains("prog simpleaction [verb] [--opt=val]..."));
    assert!(out.contains("A simple action\n"));
    assert!(out.contains("description"));
    assert!(out.contains("Always fails"));
    assert!(out.contains("An example verb."));
    assert_eq!(harness.journal.calls(), ["open", "close"]);
}

#[test]
fn test_help_for_verb() {
    let harness = Harness::new();
    let (result, out) = harness.dispatch(&["prog", "simpleaction", "help", "--verb=verb"], None);

    assert!(result.unwrap().is_success());
    assert!(out.contains("An example verb.\n"));
    assert!(out.contains("\topt:\tsome kind of options\n"));
    assert!(out.contains("\tprog simpleaction verb --opt=value\n"));
    assert!(out.contains("prog simpleaction verb"));
    assert!(!out.contains("Implementation notes"));
}

#[test]
fn test_description() {
    let harness = Harness::new();
    let (result, out) = harness.dispatch(&["prog", "base", "description"], None);

    assert!(result.unwrap().is_success());
    assert_eq!(out, "Base action class. Available verbs: description, help\n");
}
