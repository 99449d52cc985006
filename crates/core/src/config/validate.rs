use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Console prompt is not empty
/// - Logging filter is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.console.prompt.is_empty() {
        return Err(ConfigError::ValidationError(
            "console.prompt cannot be empty".to_string(),
        ));
    }

    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.filter cannot be empty".to_string(),
        ));
    }

    Ok(())
}
