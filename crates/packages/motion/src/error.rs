use std::borrow::Cow;

/// Motion package errors.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("Motion package error: {0}")]
    Internal(Cow<'static, str>),
}
