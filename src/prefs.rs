// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

// Preference capability.
//
// The engine reads five boolean switches from a store it never writes to.
// A PreferenceSnapshot is captured fresh per decision, so a decision never
// observes a half-updated set of switches; two concurrent decisions may see
// different snapshots if preferences change between calls, which is fine.

use std::collections::HashMap;

/// Block calls from mobile numbers not in the contact list.
pub const BLOCK_MOBILE: &str = "BLOCK_MOBILE";
/// Block calls from commercial calling platforms.
pub const BLOCK_COMMERCIAL: &str = "BLOCK_COMMERCIAL";
/// Block outgoing calls to premium-rate numbers.
pub const BLOCK_OUTGOING: &str = "BLOCK_OUTGOING";
/// Reject screened calls outright instead of silencing them.
pub const BLOCK_COMPLETE: &str = "BLOCK_COMPLETE";
/// Whether the host granted permission to read the contact directory.
pub const READ_CONTACTS_PERMISSION: &str = "READ_CONTACTS_PERMISSION";

/// Read-only access to the user's preference switches.
///
/// `get` returns `None` for keys the backing store has never set; defaults
/// are applied by `PreferenceSnapshot::capture`, not by implementations.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<bool>;
}

/// An immutable read of the five switches at decision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    pub block_mobile: bool,
    pub block_commercial: bool,
    pub block_outgoing: bool,
    pub block_complete: bool,
    pub read_contacts_permission: bool,
}

impl PreferenceSnapshot {
    /// Capture the current switch values, applying defaults for unset keys.
    pub fn capture(store: &dyn PreferenceStore) -> Self {
        Self {
            block_mobile: store.get(BLOCK_MOBILE).unwrap_or(false),
            block_commercial: store.get(BLOCK_COMMERCIAL).unwrap_or(true),
            block_outgoing: store.get(BLOCK_OUTGOING).unwrap_or(true),
            block_complete: store.get(BLOCK_COMPLETE).unwrap_or(false),
            read_contacts_permission: store.get(READ_CONTACTS_PERMISSION).unwrap_or(false),
        }
    }
}

impl Default for PreferenceSnapshot {
    /// The documented defaults, as captured from a store with no keys set.
    fn default() -> Self {
        Self::capture(&MemoryPreferenceStore::default())
    }
}

/// In-memory preference store, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, bool>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
