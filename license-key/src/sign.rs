//! License key issuing.

use tracing::{debug, warn};

use crate::data::LicenseData;
use crate::encoding::encode;
use crate::error::{LicenseKeyError, LicenseKeyResult};
use crate::framing::frame;
use crate::scheme::SignatureScheme;
use crate::signature::{digest, format_signature};

/// Signs `data` and returns the framed license key text.
///
/// The digest is taken over the exact encoded bytes stored in the token, so
/// a verifier that decodes and re-encodes the block recomputes it
/// identically. Only the call into `scheme` suspends.
///
/// Input checks and encoding run on the first poll, before `scheme` is
/// called; a rejected input never reaches the signing backend.
///
/// # Errors
///
/// - [`LicenseKeyError::InvalidKey`] if `private_key` is empty.
/// - [`LicenseKeyError::Encoding`] if `data` cannot be encoded unambiguously.
/// - [`LicenseKeyError::Signing`] if the scheme fails.
pub async fn generate<S>(scheme: &S, data: &LicenseData, private_key: &[u8]) -> LicenseKeyResult<String>
where
    S: SignatureScheme + ?Sized,
{
    if private_key.is_empty() {
        return Err(LicenseKeyError::InvalidKey(
            "private key is required to generate a license".to_string(),
        ));
    }

    let encoded = encode(data)?;
    let digest = digest(encoded.as_bytes());

    let signature = scheme.sign(private_key, &digest).await.map_err(|e| {
        warn!(scheme = scheme.name(), error = %e, "license signing failed");
        match e {
            e @ LicenseKeyError::Signing(_) => e,
            other => LicenseKeyError::Signing(other.to_string()),
        }
    })?;

    let token = frame(&encoded, &format_signature(&signature));
    debug!(
        scheme = scheme.name(),
        entries = data.len(),
        signature_len = signature.len(),
        "generated license key"
    );
    Ok(token)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::framing::{unframe, FOOTER, HEADER};
    use crate::signature::{parse_signature, DIGEST_LEN};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns the digest itself as the "signature".
    struct EchoScheme;

    #[async_trait]
    impl SignatureScheme for EchoScheme {
        fn name(&self) -> &'static str {
            "echo"
        }

        async fn sign(&self, _key: &[u8], digest: &[u8; DIGEST_LEN]) -> LicenseKeyResult<Vec<u8>> {
            Ok(digest.to_vec())
        }

        async fn verify(&self, _key: &[u8], digest: &[u8; DIGEST_LEN], sig: &[u8]) -> LicenseKeyResult<bool> {
            Ok(digest.as_slice() == sig)
        }
    }

    #[derive(Default)]
    struct FailingScheme {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SignatureScheme for FailingScheme {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn sign(&self, _key: &[u8], _digest: &[u8; DIGEST_LEN]) -> LicenseKeyResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LicenseKeyError::InvalidKey("backend unavailable".to_string()))
        }

        async fn verify(&self, _: &[u8], _: &[u8; DIGEST_LEN], _: &[u8]) -> LicenseKeyResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn signs_the_encoded_block() {
        let data = LicenseData::new().with("product", "Acme").with("seats", 5);
        let token = tokio_test::block_on(generate(&EchoScheme, &data, b"key")).unwrap();

        assert!(token.starts_with(HEADER));
        assert!(token.ends_with(FOOTER));
        let framed = unframe(&token).unwrap();
        assert_eq!(framed.data, "product: Acme\nseats: 5");
        assert_eq!(
            parse_signature(framed.signature).unwrap(),
            digest(b"product: Acme\nseats: 5\n")
        );
    }

    #[test]
    fn empty_private_key_rejected() {
        let scheme = FailingScheme::default();
        let err = tokio_test::block_on(generate(&scheme, &LicenseData::new(), &[])).unwrap_err();
        assert!(matches!(err, LicenseKeyError::InvalidKey(_)));
        assert_eq!(scheme.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn scheme_failure_becomes_signing_error() {
        let data = LicenseData::new().with("a", 1);
        let scheme = FailingScheme::default();
        let err = tokio_test::block_on(generate(&scheme, &data, b"key")).unwrap_err();
        assert!(matches!(err, LicenseKeyError::Signing(ref m) if m.contains("backend unavailable")));
        assert_eq!(scheme.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn encoding_failure_happens_before_signing() {
        let data = LicenseData::new().with("bad\nkey", 1);
        let scheme = FailingScheme::default();
        let err = tokio_test::block_on(generate(&scheme, &data, b"key")).unwrap_err();
        assert!(matches!(err, LicenseKeyError::Encoding(_)));
        assert_eq!(scheme.calls.load(Ordering::SeqCst), 0);
    }
}
