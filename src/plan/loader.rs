// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

use sha2::{Digest, Sha256};

use super::error::PlanError;
use super::raw;
use super::rule::CompiledRule;
use super::source::PlanSource;
use super::{CategoryRules, Plan};

/// Load and validate a numbering plan from the given source.
///
/// Steps:
/// 1. Read raw YAML bytes from source
/// 2. Compute SHA256 plan hash
/// 3. Parse YAML into raw deserialization types
/// 4. Validate version, prefixes, and family contents
/// 5. Compile one rule per category family
/// 6. Build typed Plan struct
pub fn load_plan(source: &dyn PlanSource) -> Result<Plan, PlanError> {
    let raw_yaml = source.load()?;
    let plan_hash = compute_hash(&raw_yaml);

    let raw: raw::RawPlan = serde_yaml::from_str(&raw_yaml)?;

    // Validate version
    if raw.plan != "v1" {
        return Err(PlanError::Validation(format!(
            "unsupported plan version \"{}\", expected \"v1\"",
            raw.plan
        )));
    }

    if raw.name.is_empty() {
        return Err(PlanError::Validation("plan name must not be empty".into()));
    }

    validate_prefixes(&raw.prefixes)?;

    let rules = CategoryRules {
        mobile: build_family_rule("mobile", &raw.prefixes, &raw.categories.mobile)?,
        commercial: build_family_rule("commercial", &raw.prefixes, &raw.categories.commercial)?,
        premium_rate: build_family_rule(
            "premium_rate",
            &raw.prefixes,
            &raw.categories.premium_rate,
        )?,
    };

    Ok(Plan {
        version: raw.plan,
        name: raw.name,
        prefixes: raw.prefixes,
        rules,
        plan_hash,
    })
}

pub fn compute_hash(raw_yaml: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_yaml.as_bytes());
    let hash = hasher.finalize();
    format!("sha256:{:x}", hash)
}

/// Dialing prefixes are literals: an optional leading `+` followed by digits.
/// An empty prefix is rejected — it would make the prefix group match at any
/// position-zero digit and silently widen every family.
fn validate_prefixes(prefixes: &[String]) -> Result<(), PlanError> {
    if prefixes.is_empty() {
        return Err(PlanError::Validation(
            "plan must declare at least one dialing prefix".into(),
        ));
    }
    for prefix in prefixes {
        if prefix.is_empty() {
            return Err(PlanError::Validation(
                "dialing prefix must not be empty".into(),
            ));
        }
        let digits = prefix.strip_prefix('+').unwrap_or(prefix);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlanError::Validation(format!(
                "invalid dialing prefix \"{prefix}\", expected digits with optional leading +"
            )));
        }
    }
    Ok(())
}

/// Build the compiled rule for one family:
/// `^(?:<prefix-alt>)(?:<exchange-alt>)` for exchanges behind a dialing
/// prefix, alternated with `^(?:<short-code-alt>)` for bare short codes.
fn build_family_rule(
    family: &str,
    prefixes: &[String],
    raw: &raw::RawFamily,
) -> Result<CompiledRule, PlanError> {
    if raw.exchanges.is_empty() && raw.short_codes.is_empty() {
        return Err(PlanError::Validation(format!(
            "category \"{family}\" must declare exchanges or short_codes"
        )));
    }

    // Exchange entries are regex fragments (e.g. "7[3-9]"); validate each one
    // on its own so a bad fragment is reported, not the combined expression.
    for exchange in &raw.exchanges {
        CompiledRule::compile(exchange)?;
    }
    for code in &raw.short_codes {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlanError::Validation(format!(
                "invalid short code \"{code}\" in category \"{family}\", expected digits"
            )));
        }
    }

    let mut alternatives = Vec::with_capacity(2);
    if !raw.exchanges.is_empty() {
        let prefix_alt = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let exchange_alt = raw.exchanges.join("|");
        alternatives.push(format!("^(?:{prefix_alt})(?:{exchange_alt})"));
    }
    if !raw.short_codes.is_empty() {
        let short_alt = raw.short_codes.join("|");
        alternatives.push(format!("^(?:{short_alt})"));
    }

    CompiledRule::compile(&alternatives.join("|"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
