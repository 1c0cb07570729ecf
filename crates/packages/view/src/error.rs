use std::borrow::Cow;

/// View package errors.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("View package error: {0}")]
    Internal(Cow<'static, str>),
}
