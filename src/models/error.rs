/// Failures on the way from a forecast provider to the charts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Data error: {0}")]
    DataError(String),

    /// The forecast payload lacks the requested block (`hourly`, `daily`)
    #[error("Forecast response has no {0} block")]
    MissingBlock(&'static str),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No key was compiled in for the named provider
    #[error("{0} API key is not set")]
    MissingApiKey(&'static str),

    #[error("Rate limited")]
    RateLimited,

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages() {
        assert_eq!(
            AppError::MissingBlock("hourly").to_string(),
            "Forecast response has no hourly block"
        );
        assert_eq!(
            AppError::MissingApiKey("Dark Sky").to_string(),
            "Dark Sky API key is not set"
        );
    }
}
