use bindery_kernel::domain::manifest::PackageKind;
use std::path::PathBuf;

/// Storage package errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The context's data directory is unusable as a storage root.
    #[error("Invalid storage root {path:?} for {package}")]
    InvalidRoot { package: PackageKind, path: PathBuf },
}
