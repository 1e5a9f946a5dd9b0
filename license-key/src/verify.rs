//! License key verification.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::data::LicenseData;
use crate::encoding::{decode, encode};
use crate::error::{LicenseKeyError, LicenseKeyResult};
use crate::framing::unframe;
use crate::scheme::SignatureScheme;
use crate::signature::{digest, parse_signature};

/// Verifies a license key and returns the data it carries.
///
/// Surrounding whitespace and CRLF line endings are tolerated. Input checks
/// and all parsing run on the first poll, before `scheme` is called, so
/// malformed tokens never reach the signature backend.
///
/// # Errors
///
/// - [`LicenseKeyError::EmptyInput`] if `token` is blank.
/// - [`LicenseKeyError::InvalidKey`] if `public_key` is empty.
/// - [`LicenseKeyError::MalformedToken`], [`LicenseKeyError::Decoding`] or
///   [`LicenseKeyError::SignatureFormat`] for unparseable tokens.
/// - [`LicenseKeyError::SignatureVerification`] if the signature does not
///   match or the scheme fails.
pub async fn verify<S>(scheme: &S, token: &str, public_key: &[u8]) -> LicenseKeyResult<LicenseData>
where
    S: SignatureScheme + ?Sized,
{
    let token = token.trim();
    if token.is_empty() {
        return Err(LicenseKeyError::EmptyInput(
            "license key is required to verify a license".to_string(),
        ));
    }
    if public_key.is_empty() {
        return Err(LicenseKeyError::InvalidKey(
            "public key is required to verify a license".to_string(),
        ));
    }

    let token = if token.contains('\r') {
        Cow::Owned(token.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(token)
    };

    let framed = unframe(&token)?;
    let data = decode(framed.data)?;
    let canonical = encode(&data).map_err(|e| match e {
        LicenseKeyError::Encoding(reason) => LicenseKeyError::Decoding(reason),
        other => other,
    })?;
    let digest = digest(canonical.as_bytes());
    let signature = parse_signature(framed.signature)?;

    let valid = match scheme.verify(public_key, &digest, &signature).await {
        Ok(valid) => valid,
        Err(e) => {
            warn!(scheme = scheme.name(), error = %e, "license verification backend failed");
            false
        }
    };

    if !valid {
        warn!(scheme = scheme.name(), "license key signature mismatch");
        return Err(LicenseKeyError::SignatureVerification);
    }

    debug!(scheme = scheme.name(), entries = data.len(), "verified license key");
    Ok(data)
}
