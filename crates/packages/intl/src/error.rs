/// Localization package errors.
#[derive(Debug, thiserror::Error)]
pub enum IntlError {
    /// The context's locale tag is unusable (empty or whitespace).
    #[error("Invalid locale tag {0:?}")]
    InvalidLocale(String),
}
