use super::loader::load_plan;
use super::source::StringSource;
use super::Plan;

/// The default French/Arcep numbering plan YAML, embedded at compile time.
const DEFAULT_PLAN_YAML: &str = include_str!("../../plans/fr-arcep.yaml");

/// Parse and compile the embedded default plan.
/// Called once at startup. Panics on invalid content (this is our own data).
pub fn default_plan() -> Plan {
    load_plan(&StringSource {
        content: DEFAULT_PLAN_YAML.to_string(),
    })
    .expect("embedded default plan is invalid")
}
