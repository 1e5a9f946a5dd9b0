//! Signature scheme abstraction.
//!
//! The token protocol only needs "sign a digest" and "verify a digest"; the
//! curve math lives behind [`SignatureScheme`] so issuers can plug in an HSM
//! or KMS backend. Key material is passed through as opaque bytes.

#[cfg(feature = "ed25519")]
mod ed25519;
#[cfg(feature = "secp256k1")]
mod secp256k1;

#[cfg(feature = "ed25519")]
pub use self::ed25519::Ed25519Scheme;
#[cfg(feature = "secp256k1")]
pub use self::secp256k1::Secp256k1Scheme;

use async_trait::async_trait;

use crate::error::LicenseKeyResult;
use crate::signature::DIGEST_LEN;

/// A digital signature primitive over fixed-size digests.
///
/// Both operations may suspend (remote signers); dropping the future cancels
/// the call. Failures are never retried by the caller.
#[async_trait]
pub trait SignatureScheme: Send + Sync {
    /// Short algorithm name, used in log output.
    fn name(&self) -> &'static str;

    /// Signs `digest` with `private_key`, returning raw signature bytes.
    ///
    /// Implementations report unusable key material or backend failures as
    /// [`crate::LicenseKeyError::Signing`].
    async fn sign(&self, private_key: &[u8], digest: &[u8; DIGEST_LEN]) -> LicenseKeyResult<Vec<u8>>;

    /// Checks `signature` over `digest` against `public_key`.
    ///
    /// Returns `Ok(false)` when the signature does not match, including when
    /// the key or signature bytes cannot be parsed.
    async fn verify(
        &self,
        public_key: &[u8],
        digest: &[u8; DIGEST_LEN],
        signature: &[u8],
    ) -> LicenseKeyResult<bool>;
}
