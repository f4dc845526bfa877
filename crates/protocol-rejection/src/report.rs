use crate::error::{ProtocolError, RejectionError};

/// Emits a `warn` event describing a rejection a handler has caught.
pub fn report_rejection(error: &RejectionError) {
    tracing::warn!(
        kind = %error.kind(),
        code = error.code().unwrap_or_default(),
        reason = error.message(),
        "protocol rejection"
    );
}

pub fn report_error(error: &ProtocolError) {
    match error {
        ProtocolError::Rejection(rejection) => report_rejection(rejection),
        ProtocolError::InvalidArgument(detail) => tracing::error!(
            kind = %error.kind(),
            detail = detail.as_str(),
            "malformed rejection input"
        ),
    }
}
