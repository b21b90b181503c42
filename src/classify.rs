// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

// Number classification.
//
// Maps a raw phone-number string to the set of plan categories it matches.
// Pure and stateless: the compiled rules live in the shared Plan, and the
// same input always yields the same category set. Overlap between families
// is legitimate and left to the policy engine to resolve.

use std::fmt;
use std::sync::Arc;

use crate::plan::Plan;

/// A number category defined by the numbering plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    Mobile,
    Commercial,
    /// Premium-rate "service à valeur ajoutée" numbers and short codes.
    PremiumRate,
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberCategory::Mobile => write!(f, "mobile"),
            NumberCategory::Commercial => write!(f, "commercial"),
            NumberCategory::PremiumRate => write!(f, "premium_rate"),
        }
    }
}

/// The categories a number matched. Zero, one, or several members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet {
    mobile: bool,
    commercial: bool,
    premium_rate: bool,
}

impl CategorySet {
    pub fn contains(&self, category: NumberCategory) -> bool {
        match category {
            NumberCategory::Mobile => self.mobile,
            NumberCategory::Commercial => self.commercial,
            NumberCategory::PremiumRate => self.premium_rate,
        }
    }

    /// True for numbers matching no family — "unknown", never blocked by the
    /// default rules.
    pub fn is_empty(&self) -> bool {
        !self.mobile && !self.commercial && !self.premium_rate
    }

    pub fn iter(&self) -> impl Iterator<Item = NumberCategory> + '_ {
        [
            (self.mobile, NumberCategory::Mobile),
            (self.commercial, NumberCategory::Commercial),
            (self.premium_rate, NumberCategory::PremiumRate),
        ]
        .into_iter()
        .filter_map(|(set, cat)| set.then_some(cat))
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "unknown");
        }
        let mut first = true;
        for cat in self.iter() {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{cat}")?;
            first = false;
        }
        Ok(())
    }
}

/// Classifies numbers against the compiled rules of a plan.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    plan: Arc<Plan>,
}

impl PatternClassifier {
    pub fn new(plan: Arc<Plan>) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Classify a number into the set of categories it matches.
    ///
    /// Total: no input is rejected. Empty or malformed strings simply match
    /// no family and classify to the empty set.
    pub fn classify(&self, number: &str) -> CategorySet {
        let rules = &self.plan.rules;
        CategorySet {
            mobile: rules.mobile.is_match(number),
            commercial: rules.commercial.is_match(number),
            premium_rate: rules.premium_rate.is_match(number),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::default_plan;

    fn classifier() -> PatternClassifier {
        PatternClassifier::new(Arc::new(default_plan()))
    }

    #[test]
    fn mobile_national_block_06() {
        let c = classifier();
        assert!(c.classify("0612345678").contains(NumberCategory::Mobile));
    }

    #[test]
    fn mobile_073_through_079_but_not_072() {
        let c = classifier();
        for d in 3..=9 {
            let n = format!("07{d}2345678");
            assert!(
                c.classify(&n).contains(NumberCategory::Mobile),
                "expected mobile: {n}"
            );
        }
        // 070-072 is a reserved block boundary.
        assert!(!c.classify("0702345678").contains(NumberCategory::Mobile));
        assert!(!c.classify("0712345678").contains(NumberCategory::Mobile));
        assert!(!c.classify("0722345678").contains(NumberCategory::Mobile));
    }

    #[test]
    fn mobile_international_and_overseas_forms() {
        let c = classifier();
        assert!(c.classify("+33612345678").contains(NumberCategory::Mobile));
        // Réunion/Mayotte overseas-department code.
        assert!(c.classify("+262693001122").contains(NumberCategory::Mobile));
    }

    #[test]
    fn commercial_exchange_codes() {
        let c = classifier();
        assert!(c.classify("0162123456").contains(NumberCategory::Commercial));
        assert!(c.classify("+33270123456").contains(NumberCategory::Commercial));
        assert!(c.classify("0947812345").contains(NumberCategory::Commercial));
        assert!(!c.classify("0164123456").contains(NumberCategory::Commercial));
    }

    #[test]
    fn premium_rate_exchanges_and_short_codes() {
        let c = classifier();
        assert!(c.classify("0836123456").contains(NumberCategory::PremiumRate));
        assert!(c.classify("0899001122").contains(NumberCategory::PremiumRate));
        assert!(c.classify("3600").contains(NumberCategory::PremiumRate));
    }

    #[test]
    fn short_code_rule_is_known_broad() {
        // The bare 1/3 short-code rule deliberately over-matches: any number
        // starting with 1 or 3 classifies as premium-rate, including codes
        // that are not premium-billed. Carried forward as-is from the plan.
        let c = classifier();
        assert!(c.classify("112").contains(NumberCategory::PremiumRate));
        assert!(c.classify("3915").contains(NumberCategory::PremiumRate));
    }

    #[test]
    fn overlapping_families_all_reported() {
        // A plan whose mobile and premium ranges overlap: the classifier
        // reports both and leaves disambiguation to the policy engine.
        let yaml = r#"
plan: v1
name: overlap
prefixes: ["0"]
categories:
  mobile:
    exchanges: ["6"]
  commercial:
    exchanges: ["1"]
  premium_rate:
    exchanges: ["61"]
"#;
        let plan = crate::plan::load_plan(&crate::plan::StringSource {
            content: yaml.to_string(),
        })
        .unwrap();
        let c = PatternClassifier::new(Arc::new(plan));

        let set = c.classify("0612345678");
        assert!(set.contains(NumberCategory::Mobile));
        assert!(set.contains(NumberCategory::PremiumRate));
        assert!(!set.contains(NumberCategory::Commercial));
        assert_eq!(set.to_string(), "mobile+premium_rate");
    }

    #[test]
    fn empty_and_malformed_classify_to_empty_set() {
        let c = classifier();
        assert!(c.classify("").is_empty());
        assert!(c.classify("not a number").is_empty());
        assert!(c.classify("++33").is_empty());
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let first = c.classify("0673456789");
        for _ in 0..10 {
            assert_eq!(c.classify("0673456789"), first);
        }
    }

    #[test]
    fn unknown_numbers_classify_to_empty_set() {
        let c = classifier();
        assert!(c.classify("0123456789").is_empty());
        assert!(c.classify("0412345678").is_empty());
    }

    #[test]
    fn category_set_display() {
        let c = classifier();
        assert_eq!(c.classify("0612345678").to_string(), "mobile");
        assert_eq!(c.classify("0123456789").to_string(), "unknown");
    }
}
