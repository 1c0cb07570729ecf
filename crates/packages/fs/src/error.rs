use bindery_kernel::domain::manifest::PackageKind;
use std::path::PathBuf;

/// File system package errors.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// A configured directory is unusable as a root for this package.
    #[error("Invalid root {path:?} for {package}")]
    InvalidRoot { package: PackageKind, path: PathBuf },
}
