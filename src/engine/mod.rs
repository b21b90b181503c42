// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

// Policy engine.
//
// Turns {direction, number, preference snapshot, classifier output, contact
// membership} into one Disposition. Evaluation order for incoming calls is
// fixed: the mobile rule first (the only rule with a bypass, and the only
// one gated on a permission), then the commercial rule, then default-open.
// The engine never fails: every input combination produces a Decision.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::classify::{CategorySet, NumberCategory, PatternClassifier};
use crate::contacts::ContactLookup;
use crate::plan::Plan;
use crate::prefs::{PreferenceSnapshot, PreferenceStore};


// ---------------------------------------------------------------------------
// Decision types
// ---------------------------------------------------------------------------

/// Call direction as reported by the host.
///
/// `Unknown` covers any direction value the adapter cannot map; it resolves
/// to Allow (fail-open, so an unanticipated call type is never blocked).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
    Unknown,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
            Direction::Unknown => write!(f, "unknown"),
        }
    }
}

/// The tri-state screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Call proceeds untouched.
    Allow,
    /// Call proceeds but does not ring or notify; it stays in the call log.
    Silence,
    /// Call is disallowed, as if the user had manually declined it.
    Reject,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Allow => write!(f, "allow"),
            Disposition::Silence => write!(f, "silence"),
            Disposition::Reject => write!(f, "reject"),
        }
    }
}

/// Which rule settled the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionReason {
    /// Mobile rule matched but the caller is in the contact list.
    KnownContact,
    /// Mobile rule matched and the caller is not a known contact.
    MobileUnknownCaller,
    /// Commercial rule matched.
    CommercialNumber,
    /// Outgoing call to a premium-rate number.
    PremiumRateOutgoing,
    /// Outgoing screening is switched off; number not classified.
    OutgoingUnscreened,
    /// No applicable rule matched; default-open.
    NoRuleMatched,
    /// Direction could not be mapped; fail-open.
    UnknownDirection,
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionReason::KnownContact => "known_contact",
            DecisionReason::MobileUnknownCaller => "mobile_unknown_caller",
            DecisionReason::CommercialNumber => "commercial_number",
            DecisionReason::PremiumRateOutgoing => "premium_rate_outgoing",
            DecisionReason::OutgoingUnscreened => "outgoing_unscreened",
            DecisionReason::NoRuleMatched => "no_rule_matched",
            DecisionReason::UnknownDirection => "unknown_direction",
        };
        write!(f, "{s}")
    }
}

/// The engine's output for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub disposition: Disposition,
    /// Categories the number matched. Empty when classification was skipped
    /// (unscreened outgoing calls, unknown direction).
    pub categories: CategorySet,
    pub reason: DecisionReason,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The engine's injected capabilities.
pub struct EngineDeps {
    pub plan: Arc<Plan>,
    pub prefs: Arc<dyn PreferenceStore>,
    pub contacts: Arc<dyn ContactLookup>,
}

/// Decides one call at a time. Holds no mutable state; safe for concurrent
/// decisions from multiple threads.
pub struct PolicyEngine {
    classifier: PatternClassifier,
    prefs: Arc<dyn PreferenceStore>,
    contacts: Arc<dyn ContactLookup>,
}

impl PolicyEngine {
    pub fn new_with(deps: EngineDeps) -> Self {
        Self {
            classifier: PatternClassifier::new(deps.plan),
            prefs: deps.prefs,
            contacts: deps.contacts,
        }
    }

    pub fn classifier(&self) -> &PatternClassifier {
        &self.classifier
    }

    /// Decide the disposition for one call.
    ///
    /// Captures a fresh preference snapshot, classifies the number where the
    /// rules need it, and consults the contact directory only on the
    /// mobile-incoming path. Total: always returns exactly one Decision.
    pub fn decide(&self, direction: Direction, number: &str) -> Decision {
        let started = Instant::now();
        let decision_id = Uuid::new_v4();
        let prefs = PreferenceSnapshot::capture(self.prefs.as_ref());

        let decision = match direction {
            Direction::Incoming => self.decide_incoming(number, &prefs),
            Direction::Outgoing => self.decide_outgoing(number, &prefs),
            Direction::Unknown => Decision {
                disposition: Disposition::Allow,
                categories: CategorySet::default(),
                reason: DecisionReason::UnknownDirection,
            },
        };

        tracing::info!(
            decision_id = %decision_id,
            plan_hash = %self.classifier.plan().plan_hash,
            direction = %direction,
            disposition = %decision.disposition,
            reason = %decision.reason,
            categories = %decision.categories,
            latency_ms = started.elapsed().as_secs_f64() * 1000.0,
            "call screened"
        );

        decision
    }

    fn decide_incoming(&self, number: &str, prefs: &PreferenceSnapshot) -> Decision {
        let categories = self.classifier.classify(number);

        // Mobile screening requires BOTH the switch and the contacts
        // permission: without permission the engine cannot verify known
        // contacts, so mobile numbers are never blocked.
        if prefs.block_mobile
            && prefs.read_contacts_permission
            && categories.contains(NumberCategory::Mobile)
        {
            if self.caller_known(number) {
                return Decision {
                    disposition: Disposition::Allow,
                    categories,
                    reason: DecisionReason::KnownContact,
                };
            }
            return Decision {
                disposition: screened_disposition(prefs),
                categories,
                reason: DecisionReason::MobileUnknownCaller,
            };
        }

        if prefs.block_commercial && categories.contains(NumberCategory::Commercial) {
            return Decision {
                disposition: screened_disposition(prefs),
                categories,
                reason: DecisionReason::CommercialNumber,
            };
        }

        Decision {
            disposition: Disposition::Allow,
            categories,
            reason: DecisionReason::NoRuleMatched,
        }
    }

    fn decide_outgoing(&self, number: &str, prefs: &PreferenceSnapshot) -> Decision {
        if !prefs.block_outgoing {
            return Decision {
                disposition: Disposition::Allow,
                categories: CategorySet::default(),
                reason: DecisionReason::OutgoingUnscreened,
            };
        }

        let categories = self.classifier.classify(number);
        if categories.contains(NumberCategory::PremiumRate) {
            // Hard reject, never silence: the user initiated the call, so a
            // reject is the only meaningful deterrent.
            return Decision {
                disposition: Disposition::Reject,
                categories,
                reason: DecisionReason::PremiumRateOutgoing,
            };
        }

        Decision {
            disposition: Disposition::Allow,
            categories,
            reason: DecisionReason::NoRuleMatched,
        }
    }

    /// Single best-effort lookup with a defined fallback: any directory
    /// failure means the caller cannot be verified and screening proceeds.
    fn caller_known(&self, number: &str) -> bool {
        match self.contacts.is_known_contact(number) {
            Ok(known) => known,
            Err(e) => {
                tracing::warn!(error = %e, "contact lookup failed, treating caller as unknown");
                false
            }
        }
    }
}

/// Map a "not accepted" incoming call to its disposition.
fn screened_disposition(prefs: &PreferenceSnapshot) -> Disposition {
    if prefs.block_complete {
        Disposition::Reject
    } else {
        Disposition::Silence
    }
}
