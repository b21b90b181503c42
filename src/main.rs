// Copyright 2026 The Portcullis Project
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, ValueEnum};
use portcullis::contacts::{ContactLookup, NoContacts, StaticContacts};
use portcullis::engine::{Direction, EngineDeps, PolicyEngine};
use portcullis::plan;
use portcullis::prefs::{
    MemoryPreferenceStore, BLOCK_COMMERCIAL, BLOCK_COMPLETE, BLOCK_MOBILE, BLOCK_OUTGOING,
    READ_CONTACTS_PERMISSION,
};
use portcullis::screen::{CallEvent, Screener};

use std::sync::Arc;

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Incoming,
    Outgoing,
    Unknown,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Incoming => Direction::Incoming,
            DirectionArg::Outgoing => Direction::Outgoing,
            DirectionArg::Unknown => Direction::Unknown,
        }
    }
}

#[derive(Parser)]
#[command(name = "portcullis", about = "Call screening engine")]
struct Cli {
    /// Phone number in its raw dialing form, e.g. 0612345678 or +33612345678
    number: String,

    /// Call direction
    #[arg(long, value_enum, default_value_t = DirectionArg::Incoming)]
    direction: DirectionArg,

    /// Path to a numbering-plan YAML file (default: embedded fr-arcep plan)
    #[arg(long, env = "PORTCULLIS_PLAN")]
    plan: Option<String>,

    /// File with one known-contact number per line. Providing it also grants
    /// the contacts permission, as the host does when the dialog is accepted.
    #[arg(long)]
    contacts: Option<String>,

    /// Block calls from mobile numbers not in the contact list
    #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
    block_mobile: bool,

    /// Block calls from commercial calling platforms
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    block_commercial: bool,

    /// Block outgoing calls to premium-rate numbers
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    block_outgoing: bool,

    /// Reject screened calls outright instead of silencing them
    #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
    block_complete: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let plan = match &cli.plan {
        Some(path) => {
            let source = plan::FileSource {
                path: std::path::PathBuf::from(path),
            };
            match plan::load_plan(&source) {
                Ok(p) => p,
                Err(e) => {
                    tracing::error!("failed to load plan: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => plan::default_plan(),
    };

    tracing::info!(
        plan = %plan.name,
        plan_hash = %plan.plan_hash,
        "plan loaded"
    );

    let contacts: Arc<dyn ContactLookup> = match &cli.contacts {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => Arc::new(StaticContacts::new(
                content.lines().map(str::trim).filter(|l| !l.is_empty()),
            )),
            Err(e) => {
                tracing::error!("failed to read contacts file: {e}");
                std::process::exit(1);
            }
        },
        None => Arc::new(NoContacts),
    };

    let mut prefs = MemoryPreferenceStore::new();
    prefs.set(BLOCK_MOBILE, cli.block_mobile);
    prefs.set(BLOCK_COMMERCIAL, cli.block_commercial);
    prefs.set(BLOCK_OUTGOING, cli.block_outgoing);
    prefs.set(BLOCK_COMPLETE, cli.block_complete);
    prefs.set(READ_CONTACTS_PERMISSION, cli.contacts.is_some());

    let screener = Screener::new(PolicyEngine::new_with(EngineDeps {
        plan: Arc::new(plan),
        prefs: Arc::new(prefs),
        contacts,
    }));

    let direction: Direction = cli.direction.into();
    let outcome = screener.screen(&CallEvent {
        direction,
        number: cli.number.clone(),
    });

    let verdict = serde_json::json!({
        "number": cli.number,
        "direction": direction.to_string(),
        "disposition": outcome.decision.disposition.to_string(),
        "reason": outcome.decision.reason.to_string(),
        "categories": outcome.decision.categories.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>(),
        "response": {
            "disallow_call": outcome.response.disallow_call,
            "reject_call": outcome.response.reject_call,
            "silence_call": outcome.response.silence_call,
        },
    });
    println!("{verdict}");
}
