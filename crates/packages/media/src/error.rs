use std::borrow::Cow;

/// Media package errors.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Media package error: {0}")]
    Internal(Cow<'static, str>),
}
