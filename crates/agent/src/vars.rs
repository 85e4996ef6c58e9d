// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build variable substitution
//!
//! A pure function over a snapshot of the session's variable map, with
//! no fallback to the ambient process environment. Substitution runs
//! immediately before arguments are handed to the process runner, so
//! `set_variable` nodes executed earlier in the same tree are visible.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Regex pattern for ${variable_name} or ${namespace.variable_name}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_-]*)*)\}")
        .expect("constant regex pattern is valid")
});

/// Replace every known `${name}` placeholder with its mapped value.
///
/// Unknown placeholders are left literally intact so shell-native
/// expansion downstream can still see them; an unset variable is not
/// an error.
pub fn substitute(template: &str, vars: &HashMap<String, String>) -> String {
    VAR_PATTERN
        .replace_all(template, |caps: &regex::Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .to_string()
}

/// Substitute every string of an argument vector.
pub fn substitute_all(args: &[String], vars: &HashMap<String, String>) -> Vec<String> {
    args.iter().map(|arg| substitute(arg, vars)).collect()
}

#[cfg(test)]
#[path = "vars_tests.rs"]
mod tests;
