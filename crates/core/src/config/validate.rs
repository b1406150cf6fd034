use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Default page size is at least 1
/// - Max page size is not below the default
/// - Media base URL is set
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let pagination = &config.pagination;

    if pagination.default_page_size == 0 {
        return Err(ConfigError::ValidationError(
            "pagination.default_page_size cannot be 0".to_string(),
        ));
    }

    if pagination.max_page_size < pagination.default_page_size {
        return Err(ConfigError::ValidationError(format!(
            "pagination.max_page_size ({}) is below pagination.default_page_size ({})",
            pagination.max_page_size, pagination.default_page_size
        )));
    }

    if config.media.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "media.base_url cannot be empty".to_string(),
        ));
    }

    Ok(())
}
