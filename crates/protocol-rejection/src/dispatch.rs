use std::error::Error;

use crate::error::{ProtocolError, RejectionError};

/// Walks the `source()` chain and returns the first rejection found, whether it
/// was raised bare or inside a [`ProtocolError`].
///
/// A wrapper declared `#[error(transparent)]` forwards `source()` to the inner
/// error's own source, so the inner rejection never shows up in the chain and is
/// not found. Wrap with `#[source]` instead, or match the variant directly.
pub fn find_rejection<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a RejectionError> {
    let mut current = Some(error);
    while let Some(candidate) = current {
        if let Some(rejection) = candidate.downcast_ref::<RejectionError>() {
            return Some(rejection);
        }
        if let Some(ProtocolError::Rejection(rejection)) = candidate.downcast_ref::<ProtocolError>()
        {
            return Some(rejection);
        }
        current = candidate.source();
    }
    None
}

pub fn is_rejection(error: &(dyn Error + 'static)) -> bool {
    find_rejection(error).is_some()
}
