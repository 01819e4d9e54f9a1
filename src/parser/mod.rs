//! Token parsing against a flag grammar.
//!
//! Recognized tokens, in any order:
//!
//! - `--name=value` binds the literal string `value` to a valued flag
//! - `--name` flips a boolean flag according to its [`FlagKind`]
//!
//! Dashes in flag names are normalized to underscores, so `--some-flag` and
//! `--some_flag` both bind `some_flag`. When a flag repeats, the last
//! occurrence wins. Unsupplied parameters get their declared default;
//! parameters without default stay unbound.

mod bound;
mod error;

pub use bound::BoundArguments;
pub use error::ParseError;

use crate::grammar::{FlagGrammar, FlagKind};
use crate::signature::ParamValue;
use tracing::debug;

/// Binds raw tokens to a [`FlagGrammar`].
pub struct ArgumentParser;

impl ArgumentParser {
    /// Parse `tokens` and overlay them onto the grammar's defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use director::grammar::FlagGrammar;
    /// use director::parser::ArgumentParser;
    /// use director::signature::{Signature, SignatureInspector};
    ///
    /// let signature = Signature::method()
    ///     .param("opt")
    ///     .param_default("another", false)
    ///     .param_default("last", "last");
    /// let grammar = FlagGrammar::build(&SignatureInspector::inspect(&signature).unwrap());
    ///
    /// let bound = ArgumentParser::parse(&grammar, &["--opt=value", "--another"]).unwrap();
    /// assert_eq!(bound.get_str("opt"), Some("value"));
    /// assert_eq!(bound.get_bool("another"), Some(true));
    /// assert_eq!(bound.get_str("last"), Some("last"));
    /// ```
    pub fn parse<S: AsRef<str>>(
        grammar: &FlagGrammar,
        tokens: &[S],
    ) -> Result<BoundArguments, ParseError> {
        let mut explicit = BoundArguments::new();

        for token in tokens {
            let token = token.as_ref();
            let (flag, value) = split_token(token)?;
            let name = normalize_flag_name(flag);

            let definition = grammar
                .find(&name)
                .ok_or_else(|| ParseError::unknown_flag(flag))?;

            let bound = match (definition.kind, value) {
                (FlagKind::Valued, Some(value)) => ParamValue::Str(value.to_string()),
                (FlagKind::Valued, None) => return Err(ParseError::missing_value(flag)),
                (FlagKind::BoolTrue, None) => ParamValue::Bool(false),
                (FlagKind::BoolFalse, None) => ParamValue::Bool(true),
                (_, Some(value)) => parse_bool_literal(value)
                    .map(ParamValue::Bool)
                    .ok_or_else(|| ParseError::invalid_boolean(flag, value))?,
            };

            debug!(flag = %flag, parameter = %name, value = %bound, "Bound flag");
            explicit.insert(name, bound);
        }

        let mut result = BoundArguments::new();
        for definition in grammar.flags() {
            let name = definition.parameter_name.as_str();
            if let Some(value) = explicit.get(name) {
                result.insert(name, value.clone());
            } else if let Some(default) = &definition.default {
                result.insert(name, default.clone());
            }
        }

        Ok(result)
    }
}

/// Turn `--some-flag` into the parameter name `some_flag`.
pub fn normalize_flag_name(flag: &str) -> String {
    flag.trim_start_matches("--").replace('-', "_")
}

/// Split `--name[=value]` into the flag part and the optional value.
fn split_token(token: &str) -> Result<(&str, Option<&str>), ParseError> {
    let body = token
        .strip_prefix("--")
        .ok_or_else(|| ParseError::unrecognized_token(token))?;

    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    if name.is_empty() || name.starts_with('-') {
        return Err(ParseError::unrecognized_token(token));
    }

    Ok((&token[..name.len() + 2], value))
}

fn parse_bool_literal(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
