//! Token sink shared by every option kind when rendering.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s").expect("whitespace pattern is valid");
}

/// Builder for assembling argument tokens in a consistent shape for every
/// option kind.
#[derive(Debug, Default)]
pub struct CommandArgsBuilder {
    args: Vec<String>,
}

impl CommandArgsBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append a raw argument to the builder.
    pub fn push_arg<S: Into<String>>(&mut self, arg: S) {
        self.args.push(arg.into());
    }

    /// Append a flag with no value.
    pub fn push_flag(&mut self, flag: &str) {
        self.args.push(flag.into());
    }

    /// Append a flag with value if the value is not blank.
    pub fn push_flag_value(&mut self, flag: &str, value: &str) {
        if value.trim().is_empty() {
            return;
        }

        self.args.push(flag.into());
        self.args.push(value.into());
    }

    /// Append a flag followed by a single comma-joined token of `values`.
    ///
    /// Nothing is appended when `values` is empty.
    pub fn push_comma_joined(&mut self, flag: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }

        self.args.push(flag.into());
        self.args.push(values.join(","));
    }

    /// Append the flag once per value: `-t a -t b`.
    pub fn push_flag_values<'a, I>(&mut self, flag: &str, values: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for value in values {
            self.args.push(flag.into());
            self.args.push(value.clone());
        }
    }

    /// Append a flag followed by a comma-joined token of `key=value` pairs.
    ///
    /// Values containing whitespace are wrapped in double quotes; keys are
    /// never quoted.
    pub fn push_key_values(&mut self, flag: &str, entries: &BTreeMap<String, String>) {
        if entries.is_empty() {
            return;
        }

        let joined = entries
            .iter()
            .map(|(key, value)| format!("{}={}", key, quote_if_whitespace(value)))
            .collect::<Vec<_>>()
            .join(",");

        self.args.push(flag.into());
        self.args.push(joined);
    }

    /// Return the collected arguments.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

fn quote_if_whitespace(value: &str) -> String {
    if WHITESPACE.is_match(value) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
