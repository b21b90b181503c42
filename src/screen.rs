// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

// Host adapter boundary.
//
// The host's call-interception mechanism hands over one CallEvent per call
// and applies the CallResponse it gets back. The response is the platform
// primitive triple (disallow / reject / silence); how a Disposition maps to
// it depends on the direction, because outgoing calls have no silence or
// reject-as-declined concept.

use crate::engine::{Decision, Direction, Disposition, PolicyEngine};

/// One call as delivered by the host: direction plus the raw number in its
/// scheme-specific dialing form. No canonicalization is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEvent {
    pub direction: Direction,
    pub number: String,
}

/// Platform-level screening primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallResponse {
    /// Do not let the call proceed.
    pub disallow_call: bool,
    /// Mark the call as disconnected as if the user had manually rejected it.
    pub reject_call: bool,
    /// Let the call proceed without ringing or notifying; it stays logged.
    pub silence_call: bool,
}

/// Translate a Decision into the host's primitives.
///
/// Incoming Reject sets both disallow and reject; outgoing Reject sets only
/// disallow (there is nothing to mark as declined on a call the user placed).
pub fn respond(direction: Direction, decision: &Decision) -> CallResponse {
    match (direction, decision.disposition) {
        (_, Disposition::Allow) => CallResponse::default(),
        (Direction::Incoming, Disposition::Silence) => CallResponse {
            silence_call: true,
            ..CallResponse::default()
        },
        (Direction::Incoming, Disposition::Reject) => CallResponse {
            disallow_call: true,
            reject_call: true,
            ..CallResponse::default()
        },
        (Direction::Outgoing, Disposition::Reject) => CallResponse {
            disallow_call: true,
            ..CallResponse::default()
        },
        // The engine never silences outgoing or unknown-direction calls;
        // map any such disposition to a plain disallow-free response.
        (Direction::Outgoing | Direction::Unknown, _) => CallResponse::default(),
    }
}

/// What screening one call produced: the engine's decision and its
/// platform translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOutcome {
    pub decision: Decision,
    pub response: CallResponse,
}

/// The single entry point a host adapter calls per call event.
///
/// Safe for concurrent use: all state is read-only behind the engine.
pub struct Screener {
    engine: PolicyEngine,
}

impl Screener {
    pub fn new(engine: PolicyEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// Screen one call: decide, then translate for the platform.
    pub fn screen(&self, event: &CallEvent) -> ScreenOutcome {
        let decision = self.engine.decide(event.direction, &event.number);
        let response = respond(event.direction, &decision);
        ScreenOutcome { decision, response }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
