use std::borrow::Cow;

/// Generated package errors.
#[derive(Debug, thiserror::Error)]
pub enum GeneratedError {
    #[error("Generated package error: {0}")]
    Internal(Cow<'static, str>),
}
