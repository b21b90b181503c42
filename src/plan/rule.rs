// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use regex::Regex;

use super::error::PlanError;

/// A compiled category rule: the disjunction of every way a number can enter
/// one pattern family, start-anchored. The original expression string is
/// preserved for debugging/display.
///
/// Matching uses find semantics: the rule is satisfied if the anchored
/// pattern matches a prefix of the number, trailing digits are tolerated.
#[derive(Clone)]
pub struct CompiledRule {
    pub expr: String,
    regex: Regex,
}

impl CompiledRule {
    /// Compile a rule expression, returning `PlanError::InvalidRegex` on failure.
    pub fn compile(expr: &str) -> Result<Self, PlanError> {
        let regex = Regex::new(expr).map_err(|e| PlanError::InvalidRegex {
            pattern: expr.to_string(),
            source: e,
        })?;
        Ok(Self {
            expr: expr.to_string(),
            regex,
        })
    }

    /// Test whether the rule matches the given number.
    pub fn is_match(&self, number: &str) -> bool {
        self.regex.is_match(number)
    }
}

impl fmt::Debug for CompiledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledRule").field("expr", &self.expr).finish()
    }
}

impl PartialEq for CompiledRule {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}
