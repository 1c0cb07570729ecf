//! The closed set of package kinds the host knows how to bind.
//!
//! The set is compile-time-known and finite; keeping it as an enum (rather
//! than open-ended dispatch) lets the facade's constructor dispatch stay
//! exhaustive: adding a kind without a constructor fails to compile.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every package type the host runtime can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackageKind {
    SafeAreaView,
    AsyncStorage,
    WebView,
    Cookies,
    GestureHandler,
    BlobUtil,
    Fs,
    Localize,
    ViewPager,
    PdfView,
    Reanimated,
    Share,
    SecureKeyStore,
    SecureRandom,
    Immersive,
    FileViewer,
    DocumentPicker,
    ImagePicker,
    Generated,
}

/// Fixed registration order used by the default host build.
///
/// The order is declared here once and never derived from runtime data. The
/// codegen catch-all (`Generated`) stays last so its capability names resolve
/// with the lowest precedence under last-registered-wins.
pub const DEFAULT_ORDER: [PackageKind; 19] = [
    PackageKind::SafeAreaView,
    PackageKind::AsyncStorage,
    PackageKind::WebView,
    PackageKind::Cookies,
    PackageKind::GestureHandler,
    PackageKind::BlobUtil,
    PackageKind::Fs,
    PackageKind::Localize,
    PackageKind::ViewPager,
    PackageKind::PdfView,
    PackageKind::Reanimated,
    PackageKind::Share,
    PackageKind::SecureKeyStore,
    PackageKind::SecureRandom,
    PackageKind::Immersive,
    PackageKind::FileViewer,
    PackageKind::DocumentPicker,
    PackageKind::ImagePicker,
    PackageKind::Generated,
];

impl PackageKind {
    /// Stable textual name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SafeAreaView => "SafeAreaView",
            Self::AsyncStorage => "AsyncStorage",
            Self::WebView => "WebView",
            Self::Cookies => "Cookies",
            Self::GestureHandler => "GestureHandler",
            Self::BlobUtil => "BlobUtil",
            Self::Fs => "Fs",
            Self::Localize => "Localize",
            Self::ViewPager => "ViewPager",
            Self::PdfView => "PdfView",
            Self::Reanimated => "Reanimated",
            Self::Share => "Share",
            Self::SecureKeyStore => "SecureKeyStore",
            Self::SecureRandom => "SecureRandom",
            Self::Immersive => "Immersive",
            Self::FileViewer => "FileViewer",
            Self::DocumentPicker => "DocumentPicker",
            Self::ImagePicker => "ImagePicker",
            Self::Generated => "Generated",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
