// Raw YAML deserialization types (internal)
// These are separate from the public Plan structs because:
// 1. serde_yaml needs Deserialize, but the public types contain Regex (not Deserialize)
// 2. We validate prefixes and compile rule expressions between raw and public
// 3. Keeps the public API clean

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawPlan {
    pub plan: String,
    pub name: String,
    pub prefixes: Vec<String>,
    pub categories: RawCategories,
}

#[derive(Debug, Deserialize)]
pub struct RawCategories {
    pub mobile: RawFamily,
    pub commercial: RawFamily,
    pub premium_rate: RawFamily,
}

/// One pattern family: exchange codes matched after a dialing prefix, and
/// short codes matched bare at the start of the number.
#[derive(Debug, Deserialize)]
pub struct RawFamily {
    #[serde(default)]
    pub exchanges: Vec<String>,
    #[serde(default)]
    pub short_codes: Vec<String>,
}
