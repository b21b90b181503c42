// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

// Numbering-plan configuration.
//
// The pattern families the classifier matches against are data, not code: a
// plan is a YAML document naming the dialing prefixes and, per category, the
// exchange codes and bare short codes of one country's numbering plan.
// Swapping the plan swaps the country without touching the policy engine.

mod defaults;
mod error;
mod loader;
mod raw;
mod rule;
mod source;

pub use defaults::default_plan;
pub use error::PlanError;
pub use loader::{compute_hash, load_plan};
pub use rule::CompiledRule;
pub use source::{FileSource, PlanSource, StringSource};

/// A loaded, validated numbering plan with its rules compiled.
///
/// Built once at startup and shared immutably; concurrent reads need no
/// locking.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Plan schema version (currently always "v1").
    pub version: String,
    /// Human-readable plan name, e.g. "fr-arcep".
    pub name: String,
    /// Literal dialing prefixes accepted before an exchange code.
    pub prefixes: Vec<String>,
    /// Compiled rule per number category.
    pub rules: CategoryRules,
    /// `sha256:<hex>` of the raw plan YAML, logged with every decision.
    pub plan_hash: String,
}

/// The three compiled pattern families of a plan.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    pub mobile: CompiledRule,
    pub commercial: CompiledRule,
    pub premium_rate: CompiledRule,
}
