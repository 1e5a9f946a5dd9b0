//! Error types for license key issuing and verification.

use thiserror::Error;

/// License key errors.
///
/// Every failure of [`crate::verify`] means "reject the license"; the variants
/// only exist for diagnostics.
#[derive(Debug, Error)]
pub enum LicenseKeyError {
    /// A required input (token text, data) was missing or empty.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Key material was empty or otherwise unusable as a byte buffer.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Header, footer or blank-line structure of the token is wrong.
    #[error("malformed license key: {0}")]
    MalformedToken(String),

    /// License data cannot be written unambiguously.
    #[error("license data encoding error: {0}")]
    Encoding(String),

    /// The key-value block of a token cannot be parsed.
    #[error("license data decoding error: {0}")]
    Decoding(String),

    /// The signature block is not valid hexadecimal.
    #[error("invalid signature format: {0}")]
    SignatureFormat(String),

    /// The signing backend failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The signature does not match the data and public key.
    #[error("license key signature invalid")]
    SignatureVerification,

    /// JSON conversion error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LicenseKeyError {
    /// Returns true if the error was caused by unparseable token text rather
    /// than by a cryptographic check.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken(_) | Self::Decoding(_) | Self::SignatureFormat(_)
        )
    }
}

/// Result type for license key operations.
pub type LicenseKeyResult<T> = Result<T, LicenseKeyError>;
