use thiserror::Error;

/// Failure raised by an upstream client (mod site or release API)
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: {}", retry_hint(.retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!("retry after {} seconds", secs),
        None => "no retry time given".to_string(),
    }
}

impl ClientError {
    /// Full diagnostic text: the error followed by its chain of sources
    pub fn diagnostic(&self) -> String {
        let mut text = self.to_string();
        // The direct source is already part of the message
        let mut source = std::error::Error::source(self).and_then(|e| e.source());
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ClientError::NotFound("Pathoschild/SMAPI".to_string()), "Not found: Pathoschild/SMAPI")]
    #[case(ClientError::InvalidResponse("Unexpected status: 500".to_string()), "Invalid response: Unexpected status: 500")]
    #[case(ClientError::RateLimited { retry_after_secs: Some(60) }, "Rate limited: retry after 60 seconds")]
    #[case(ClientError::RateLimited { retry_after_secs: None }, "Rate limited: no retry time given")]
    fn diagnostic_includes_error_text(#[case] error: ClientError, #[case] expected: &str) {
        assert_eq!(error.diagnostic(), expected);
    }
}
