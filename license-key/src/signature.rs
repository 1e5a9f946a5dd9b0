//! Digest computation and the text form of signatures.

use sha2::{Digest, Sha256};

use crate::error::{LicenseKeyError, LicenseKeyResult};

/// Length of the SHA-256 digest that gets signed.
pub const DIGEST_LEN: usize = 32;

/// Hex characters per signature line.
pub const SIGNATURE_LINE_WIDTH: usize = 32;

/// SHA-256 over the canonical encoding.
#[must_use]
pub fn digest(encoded: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(encoded).into()
}

/// Formats raw signature bytes as uppercase hex wrapped at
/// [`SIGNATURE_LINE_WIDTH`] characters. The last line may be shorter.
#[must_use]
pub fn format_signature(signature: &[u8]) -> String {
    let hex = hex::encode_upper(signature);
    hex.as_bytes()
        .chunks(SIGNATURE_LINE_WIDTH)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses a formatted signature block back into raw bytes.
///
/// Line breaks are removed before hex decoding. Only uppercase digits are
/// accepted, so every text form maps to exactly one byte form.
///
/// # Errors
///
/// Returns [`LicenseKeyError::SignatureFormat`] on characters other than
/// `0-9A-F`, an odd number of digits, or an empty block.
pub fn parse_signature(formatted: &str) -> LicenseKeyResult<Vec<u8>> {
    let hex: String = formatted.chars().filter(|&c| c != '\n').collect();
    if hex.is_empty() {
        return Err(LicenseKeyError::SignatureFormat("empty signature".to_string()));
    }
    if let Some(bad) = hex.chars().find(|c| !matches!(c, '0'..='9' | 'A'..='F')) {
        return Err(LicenseKeyError::SignatureFormat(format!(
            "unexpected character {bad:?}"
        )));
    }
    hex::decode(&hex).map_err(|e| LicenseKeyError::SignatureFormat(e.to_string()))
}
