//! Email dispatch errors

use thiserror::Error;

/// Failure of a single email dispatch attempt
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The service answered with a non-success status
    #[error("email service rejected the message ({status}): {text}")]
    Rejected { status: u16, text: String },

    /// The service could not be reached or the request could not be built
    #[error("failed to reach email service: {0}")]
    Transport(#[from] reqwest::Error),

    /// A required EmailJS identifier is missing
    #[error("email service is not configured: missing {0}")]
    NotConfigured(&'static str),
}

impl DispatchError {
    /// Human-readable text reported by the service, if it sent any
    pub fn user_text(&self) -> Option<&str> {
        match self {
            Self::Rejected { text, .. } => {
                let text = text.trim();
                (!text.is_empty()).then_some(text)
            }
            Self::Transport(_) | Self::NotConfigured(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_exposes_service_text() {
        let err = DispatchError::Rejected {
            status: 429,
            text: "quota exceeded".to_string(),
        };
        assert_eq!(err.user_text(), Some("quota exceeded"));
        assert_eq!(
            err.to_string(),
            "email service rejected the message (429): quota exceeded"
        );
    }

    #[test]
    fn test_blank_rejection_text_is_none() {
        let err = DispatchError::Rejected {
            status: 500,
            text: "  ".to_string(),
        };
        assert_eq!(err.user_text(), None);
    }

    #[test]
    fn test_not_configured_has_no_user_text() {
        let err = DispatchError::NotConfigured("service_id");
        assert_eq!(err.user_text(), None);
        assert!(err.to_string().contains("service_id"));
    }
}
