use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown to the reader for every catalog failure. The cause is logged,
/// never surfaced.
pub const CONNECTION_PROBLEM_MESSAGE: &str =
    "Kartlar yüklenirken bir sorun oluştu. İnternet bağlantınızı kontrol edip tekrar deneyin.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Network,
    FetchFailure,
    MalformedPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Network(String),
    #[error("catalog responded with non-success status {status}")]
    FetchFailure { status: u16 },
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(String),
}

impl CatalogError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Network(_) => ErrorCode::Network,
            Self::FetchFailure { .. } => ErrorCode::FetchFailure,
            Self::MalformedPayload(_) => ErrorCode::MalformedPayload,
        }
    }

    pub fn user_message(&self) -> &'static str {
        CONNECTION_PROBLEM_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_collapses_to_the_connection_message() {
        let failures = [
            CatalogError::Network("dns".into()),
            CatalogError::FetchFailure { status: 503 },
            CatalogError::malformed("missing cards"),
        ];
        for failure in &failures {
            assert_eq!(failure.user_message(), CONNECTION_PROBLEM_MESSAGE);
        }
        assert_eq!(failures[1].code(), ErrorCode::FetchFailure);
        assert!(failures[1].to_string().contains("503"));
    }
}
