use serde::{Deserialize, Serialize};

/// Describes which boilerplate to strip from a family of exam dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Regular expressions; every match is removed from each line.
    #[serde(default)]
    pub footer_patterns: Vec<String>,
    /// Remove a run of digits at the very end of each line.
    #[serde(default = "default_true")]
    pub strip_page_numbers: bool,
}

fn default_true() -> bool {
    true
}
