use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::message::RejectionMessage;

/// Tag used at catch sites to tell rejections apart from malformed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    Rejection,
    InvalidArgument,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rejection => "Rejection",
            Self::InvalidArgument => "InvalidArgument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protocol-level refusal raised through `Result`.
///
/// Displays as the payload's `message`. The payload itself is kept whole so a
/// handler can branch on its code or forward it to a peer without re-parsing
/// the display text.
#[derive(Clone, Debug, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct RejectionError {
    message: String,
    rejection_message: RejectionMessage,
}

impl RejectionError {
    pub fn new(rejection_message: RejectionMessage) -> Self {
        Self {
            message: rejection_message.message().to_string(),
            rejection_message,
        }
    }

    /// Builds the error from an untyped collaborator payload.
    pub fn try_from_value(value: Value) -> ProtocolResult<Self> {
        RejectionMessage::from_value(value).map(Self::new)
    }

    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Rejection
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.rejection_message.code()
    }

    pub fn rejection_message(&self) -> &RejectionMessage {
        &self.rejection_message
    }

    pub fn into_rejection_message(self) -> RejectionMessage {
        self.rejection_message
    }
}

impl From<RejectionMessage> for RejectionError {
    fn from(rejection_message: RejectionMessage) -> Self {
        Self::new(rejection_message)
    }
}

impl TryFrom<Option<RejectionMessage>> for RejectionError {
    type Error = ProtocolError;

    fn try_from(rejection_message: Option<RejectionMessage>) -> Result<Self, Self::Error> {
        rejection_message.map(Self::new).ok_or_else(|| {
            ProtocolError::InvalidArgument("no rejection message supplied".to_string())
        })
    }
}

/// Top-level error type for the protocol-rejection crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Rejection(#[from] RejectionError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

impl ProtocolError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejection(_) => ErrorKind::Rejection,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    pub fn as_rejection(&self) -> Option<&RejectionError> {
        match self {
            Self::Rejection(rejection) => Some(rejection),
            Self::InvalidArgument(_) => None,
        }
    }

    pub fn into_rejection(self) -> Result<RejectionError, ProtocolError> {
        match self {
            Self::Rejection(rejection) => Ok(rejection),
            other => Err(other),
        }
    }
}

impl From<RejectionMessage> for ProtocolError {
    fn from(rejection_message: RejectionMessage) -> Self {
        Self::Rejection(RejectionError::new(rejection_message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejection_error_insufficient_liquidity_expected_message_copied() {
        let error = RejectionError::new(RejectionMessage::new("Insufficient liquidity"));

        assert_eq!(error.to_string(), "Insufficient liquidity");
        assert_eq!(error.message(), "Insufficient liquidity");
        assert_eq!(
            error.rejection_message().message(),
            "Insufficient liquidity"
        );
        assert_eq!(error.kind(), ErrorKind::Rejection);
    }

    #[test]
    fn rejection_error_with_code_expected_code_preserved() {
        let error = RejectionError::try_from_value(json!({"message": "Timed out", "code": "T01"}))
            .expect("payload should validate");

        assert_eq!(error.code(), Some("T01"));
        assert_eq!(error.rejection_message().field("code"), Some(json!("T01")));
    }

    #[test]
    fn rejection_error_from_none_expected_invalid_argument() {
        let error = RejectionError::try_from(None).expect_err("absent payload");

        assert!(matches!(error, ProtocolError::InvalidArgument(_)));
        assert_eq!(error.to_string(), "invalid argument: no rejection message supplied");
    }

    #[test]
    fn protocol_error_rejection_expected_transparent_display() {
        let error: ProtocolError = RejectionMessage::new("Quote expired").into();

        assert_eq!(error.kind(), ErrorKind::Rejection);
        assert_eq!(error.to_string(), "Quote expired");
        assert_eq!(
            error.as_rejection().map(RejectionError::message),
            Some("Quote expired")
        );
    }

    #[test]
    fn protocol_error_invalid_argument_into_rejection_expected_err() {
        let error = ProtocolError::InvalidArgument("bad".to_string());

        assert_eq!(error.kind().as_str(), "InvalidArgument");
        assert!(error.as_rejection().is_none());
        assert_eq!(
            error.into_rejection(),
            Err(ProtocolError::InvalidArgument("bad".to_string()))
        );
    }

    #[test]
    fn rejection_error_serialize_expected_payload_nested() {
        let error = RejectionError::new(RejectionMessage::new("Timed out").with_code("T01"));

        let encoded = serde_json::to_value(&error).expect("error should serialize");
        assert_eq!(
            encoded,
            json!({
                "message": "Timed out",
                "rejection_message": {"message": "Timed out", "code": "T01"},
            })
        );
    }
}
