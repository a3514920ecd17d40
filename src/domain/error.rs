use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Fetch error: {document_id} - {message}")]
    Fetch {
        document_id: String,
        message: String,
    },

    #[error("Summarization error: {message}")]
    Summarization { message: String },

    #[error("Completion error: {provider} - {message}")]
    Completion { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn fetch(document_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            document_id: document_id.into(),
            message: message.into(),
        }
    }

    pub fn summarization(message: impl Into<String>) -> Self {
        Self::Summarization {
            message: message.into(),
        }
    }

    pub fn completion(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Completion {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("message must not be empty");
        assert_eq!(
            error.to_string(),
            "Validation error: message must not be empty"
        );
    }

    #[test]
    fn test_fetch_error() {
        let error = DomainError::fetch("doc-123", "HTTP 404");
        assert_eq!(error.to_string(), "Fetch error: doc-123 - HTTP 404");
    }

    #[test]
    fn test_completion_error() {
        let error = DomainError::completion("openai", "connection refused");
        assert_eq!(
            error.to_string(),
            "Completion error: openai - connection refused"
        );
    }
}
