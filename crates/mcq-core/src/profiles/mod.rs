pub mod builtin;
pub mod schema;

use crate::error::McqError;
use crate::parsing::clean::TextCleaner;
use regex::Regex;
use schema::CleanProfile;
use std::path::Path;

/// Load a cleaning profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<CleanProfile, McqError> {
    let content = std::fs::read_to_string(path).map_err(|e| McqError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a cleaning profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<CleanProfile, McqError> {
    let profile: CleanProfile = serde_json::from_str(json).map_err(|e| McqError::ProfileLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
pub fn validate_profile(profile: &CleanProfile) -> Result<(), McqError> {
    if profile.name.trim().is_empty() {
        return Err(McqError::ProfileInvalid("name must not be empty".into()));
    }

    for pattern in &profile.footer_patterns {
        if pattern.is_empty() {
            return Err(McqError::ProfileInvalid(
                "footer pattern must not be empty".into(),
            ));
        }
        Regex::new(pattern).map_err(|e| {
            McqError::ProfileInvalid(format!("footer pattern '{}' does not compile: {}", pattern, e))
        })?;
    }

    Ok(())
}

/// Resolve the cleaner for an optional profile file, else a preset name,
/// else the default preset.
pub fn resolve_cleaner(
    preset: Option<&str>,
    profile_file: Option<&Path>,
) -> Result<TextCleaner, McqError> {
    let profile = match (profile_file, preset) {
        (Some(path), _) => load_profile(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET)?,
    };
    let cleaner = TextCleaner::from_profile(&profile)?;
    log::debug!(
        "using cleaning profile '{}' ({} footer pattern(s))",
        profile.name,
        cleaner.footer_count()
    );
    Ok(cleaner)
}
