use serde::{Deserialize, Serialize};

/// A user-defined style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStyle {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// Prefix for generated custom style identifiers.
pub const CUSTOM_STYLE_ID_PREFIX: &str = "custom-";

/// Build a time-based identifier that does not collide with `existing`.
pub fn next_custom_style_id(now_millis: i64, existing: &[CustomStyle]) -> String {
    let base = format!("{}{}", CUSTOM_STYLE_ID_PREFIX, now_millis);
    if !existing.iter().any(|style| style.id == base) {
        return base;
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !existing.iter().any(|style| style.id == candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
