use std::borrow::Cow;

/// Web package errors.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Web package error: {0}")]
    Internal(Cow<'static, str>),
}
