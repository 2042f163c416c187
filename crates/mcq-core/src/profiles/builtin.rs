use crate::error::McqError;
use crate::profiles::schema::CleanProfile;

const ACTUALTESTS_JSON: &str = include_str!("../../../../profiles/actualtests.json");
const PLAIN_JSON: &str = include_str!("../../../../profiles/plain.json");

/// Available predefined profiles. The first one is the default.
pub const PRESETS: &[&str] = &["actualtests", "plain"];

pub const DEFAULT_PRESET: &str = "actualtests";

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<CleanProfile, McqError> {
    let json = match name {
        "actualtests" => ACTUALTESTS_JSON,
        "plain" => PLAIN_JSON,
        _ => {
            return Err(McqError::ProfileInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let profile: CleanProfile = serde_json::from_str(json)?;
    Ok(profile)
}
