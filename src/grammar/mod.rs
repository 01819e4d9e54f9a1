//! Flag grammar derived from verb parameters.
//!
//! Every parameter becomes exactly one long flag. Its kind is inferred from
//! the declared default:
//!
//! | default        | kind        | bare `--name` binds | absent binds |
//! |----------------|-------------|---------------------|--------------|
//! | `true`         | `BoolTrue`  | `false`             | `true`       |
//! | `false`        | `BoolFalse` | `true`              | `false`      |
//! | anything else  | `Valued`    | error               | default      |
//!
//! A `true` default means presence of the flag turns it off.

use crate::signature::{ParamValue, ParameterSpec};
use clap::{Arg, ArgAction, Command};

/// How a flag reacts to being present on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagKind {
    /// Default `true`; bare presence stores `false`.
    BoolTrue,
    /// Default `false`; bare presence stores `true`.
    BoolFalse,
    /// Takes a string through `--name=value`.
    Valued,
}

/// The flag derived from one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagDefinition {
    /// Parameter the flag binds to.
    pub parameter_name: String,
    /// Inferred kind.
    pub kind: FlagKind,
    /// Declared default, `None` when the parameter has none.
    pub default: Option<ParamValue>,
}

impl FlagDefinition {
    /// Derive the flag for a parameter.
    pub fn from_spec(spec: &ParameterSpec) -> Self {
        let kind = match spec.default {
            Some(ParamValue::Bool(true)) => FlagKind::BoolTrue,
            Some(ParamValue::Bool(false)) => FlagKind::BoolFalse,
            _ => FlagKind::Valued,
        };

        Self {
            parameter_name: spec.name.clone(),
            kind,
            default: spec.default.clone(),
        }
    }

    /// Long flag as typed on the command line, e.g. `--some-flag`.
    pub fn long_flag(&self) -> String {
        format!("--{}", self.parameter_name.replace('_', "-"))
    }

    /// Value bound when the flag is given bare, `None` for valued flags.
    pub fn presence_value(&self) -> Option<ParamValue> {
        match self.kind {
            FlagKind::BoolTrue => Some(ParamValue::Bool(false)),
            FlagKind::BoolFalse => Some(ParamValue::Bool(true)),
            FlagKind::Valued => None,
        }
    }

    /// Whether the flag is one of the boolean kinds.
    pub fn is_boolean(&self) -> bool {
        self.kind != FlagKind::Valued
    }

    fn to_arg(&self) -> Arg {
        let long = self.parameter_name.replace('_', "-");
        let arg = Arg::new(self.parameter_name.clone()).long(long);

        match self.kind {
            FlagKind::BoolTrue => arg.action(ArgAction::SetFalse).help("default: true"),
            FlagKind::BoolFalse => arg.action(ArgAction::SetTrue).help("default: false"),
            FlagKind::Valued => {
                let arg = arg
                    .action(ArgAction::Set)
                    .require_equals(true)
                    .value_name(self.parameter_name.to_uppercase());
                match &self.default {
                    None => arg.required(true),
                    Some(default) => arg.help(format!("default: {}", default)),
                }
            }
        }
    }
}

/// Ordered flag definitions of one verb.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagGrammar {
    flags: Vec<FlagDefinition>,
}

impl FlagGrammar {
    /// Derive the grammar for a parameter list, keeping declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use director::grammar::{FlagGrammar, FlagKind};
    /// use director::signature::ParameterSpec;
    ///
    /// let grammar = FlagGrammar::build(&[
    ///     ParameterSpec::required("opt"),
    ///     ParameterSpec::with_default("another", false),
    ///     ParameterSpec::with_default("quiet", true),
    /// ]);
    ///
    /// assert_eq!(grammar.find("opt").unwrap().kind, FlagKind::Valued);
    /// assert_eq!(grammar.find("another").unwrap().kind, FlagKind::BoolFalse);
    /// assert_eq!(grammar.find("quiet").unwrap().kind, FlagKind::BoolTrue);
    /// ```
    pub fn build(specs: &[ParameterSpec]) -> Self {
        Self {
            flags: specs.iter().map(FlagDefinition::from_spec).collect(),
        }
    }

    /// Look a flag up by parameter name.
    pub fn find(&self, parameter_name: &str) -> Option<&FlagDefinition> {
        self.flags.iter().find(|f| f.parameter_name == parameter_name)
    }

    /// All flags in declaration order.
    pub fn flags(&self) -> &[FlagDefinition] {
        &self.flags
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the grammar has no flags.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Render the grammar as a clap command named `bin_name`.
    ///
    /// Only used to produce usage lines for help output; token parsing is
    /// done by [`crate::parser::ArgumentParser`].
    pub fn to_command(&self, bin_name: impl Into<String>) -> Command {
        let bin_name = bin_name.into();
        self.flags.iter().fold(
            Command::new(bin_name.clone())
                .bin_name(bin_name)
                .disable_help_flag(true)
                .disable_version_flag(true),
            |cmd, flag| cmd.arg(flag.to_arg()),
        )
    }

    /// One-line usage for `bin_name`, e.g. `Usage: app noun verb --opt=<OPT>`.
    pub fn usage(&self, bin_name: impl Into<String>) -> String {
        self.to_command(bin_name).render_usage().to_string()
    }
}
