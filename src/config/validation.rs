use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings.
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(api_domain: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(validate_config("https://statsapi.web.nhl.com", &None).is_ok());
        assert!(validate_config("http://localhost:8080", &None).is_ok());
        assert!(validate_config("statsapi.web.nhl.com", &None).is_ok());
        assert!(validate_config("localhost", &None).is_ok());
    }

    #[test]
    fn test_empty_domain_is_rejected() {
        assert!(validate_config("", &None).is_err());
    }

    #[test]
    fn test_garbage_domain_is_rejected() {
        assert!(validate_config("notadomain", &None).is_err());
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        let result = validate_config("https://statsapi.web.nhl.com", &Some(String::new()));
        assert!(result.is_err());
    }
}
