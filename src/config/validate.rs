//! Required-field validation

use thiserror::Error;

use super::aliases::Field;

/// Fatal configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required fields resolved to empty. Lists every one of them.
    #[error("missing required configuration: {}", .fields.join(", "))]
    MissingRequired { fields: Vec<&'static str> },
}

/// Fields that must be non-empty unless OAuth mode is on.
pub const STATIC_CREDENTIALS: &[Field] = &[Field::ApiKey, Field::TeamId];

/// Check static credentials.
///
/// Skipped entirely in OAuth mode, where credentials arrive through the token
/// exchange instead. Otherwise every empty field is collected before failing.
pub fn validate_required<'a, F>(enable_oauth: bool, value_of: F) -> Result<(), ConfigError>
where
    F: Fn(Field) -> &'a str,
{
    if enable_oauth {
        return Ok(());
    }

    let missing: Vec<&'static str> = STATIC_CREDENTIALS
        .iter()
        .filter(|field| value_of(**field).is_empty())
        .map(|field| field.canonical_name())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingRequired { fields: missing })
    }
}
