// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

// Contact-lookup capability.
//
// The engine asks a directory one question: is this number a known contact?
// Lookups may block on I/O inside the implementation; a failure of any kind
// is resolved by the engine to "not known" (fail toward screening, never
// toward silently trusting an unverifiable caller).

use std::collections::HashSet;

/// Errors a contact directory can report. The engine logs these and treats
/// the caller as unknown; they never surface as a decision failure.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("contact directory unavailable: {0}")]
    Unavailable(String),

    #[error("contact query failed: {0}")]
    Query(String),

    #[error("contact query timed out after {0} ms")]
    Timeout(u64),
}

/// Answers contact-membership queries for phone numbers.
pub trait ContactLookup: Send + Sync {
    fn is_known_contact(&self, number: &str) -> Result<bool, ContactError>;
}

/// The absent directory: every caller is unknown. Used when the host has no
/// contact store or the contacts permission was never granted.
pub struct NoContacts;

impl ContactLookup for NoContacts {
    fn is_known_contact(&self, _number: &str) -> Result<bool, ContactError> {
        Ok(false)
    }
}

/// In-memory directory backed by a fixed set of numbers.
///
/// Membership ignores common separator characters (spaces, dots, dashes) on
/// both sides, so "06 12 34 56 78" matches an entry stored as "0612345678".
/// No other canonicalization is performed; national and international forms
/// of the same line are distinct entries.
pub struct StaticContacts {
    numbers: HashSet<String>,
}

impl StaticContacts {
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            numbers: numbers
                .into_iter()
                .map(|n| strip_separators(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }
}

impl ContactLookup for StaticContacts {
    fn is_known_contact(&self, number: &str) -> Result<bool, ContactError> {
        Ok(self.numbers.contains(&strip_separators(number)))
    }
}

fn strip_separators(number: &str) -> String {
    number
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
