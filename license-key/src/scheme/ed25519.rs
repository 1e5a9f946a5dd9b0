//! Ed25519 backend.

use async_trait::async_trait;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use tracing::debug;

use super::SignatureScheme;
use crate::error::{LicenseKeyError, LicenseKeyResult};
use crate::signature::DIGEST_LEN;

/// Ed25519 signatures (64 bytes) over the digest.
///
/// Private keys are the 32-byte seed, public keys the 32-byte compressed
/// point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Scheme;

impl Ed25519Scheme {
    /// Derives the 32-byte public key for a 32-byte private key seed.
    pub fn public_key_for(private_key: &[u8]) -> LicenseKeyResult<Vec<u8>> {
        Ok(signing_key(private_key)?.verifying_key().to_bytes().to_vec())
    }
}

fn signing_key(private_key: &[u8]) -> LicenseKeyResult<SigningKey> {
    let seed: [u8; 32] = private_key.try_into().map_err(|_| {
        LicenseKeyError::Signing(format!(
            "invalid Ed25519 private key: expected 32 bytes, got {}",
            private_key.len()
        ))
    })?;
    Ok(SigningKey::from_bytes(&seed))
}

#[async_trait]
impl SignatureScheme for Ed25519Scheme {
    fn name(&self) -> &'static str {
        "ed25519"
    }

    async fn sign(&self, private_key: &[u8], digest: &[u8; DIGEST_LEN]) -> LicenseKeyResult<Vec<u8>> {
        let key = signing_key(private_key)?;
        Ok(key.sign(digest).to_bytes().to_vec())
    }

    async fn verify(
        &self,
        public_key: &[u8],
        digest: &[u8; DIGEST_LEN],
        signature: &[u8],
    ) -> LicenseKeyResult<bool> {
        let Ok(key_bytes) = <[u8; 32]>::try_from(public_key) else {
            debug!(len = public_key.len(), "Ed25519 public key has wrong length");
            return Ok(false);
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
            debug!("Ed25519 public key is not a valid point");
            return Ok(false);
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            debug!(len = signature.len(), "Ed25519 signature has wrong length");
            return Ok(false);
        };
        Ok(verifying_key.verify(digest, &signature).is_ok())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SEED: [u8; 32] = [7u8; 32];

    #[tokio::test]
    async fn sign_and_verify() {
        let scheme = Ed25519Scheme;
        let public = Ed25519Scheme::public_key_for(&SEED).unwrap();
        let digest = [1u8; DIGEST_LEN];

        let sig = scheme.sign(&SEED, &digest).await.unwrap();
        assert_eq!(sig.len(), 64);
        assert!(scheme.verify(&public, &digest, &sig).await.unwrap());
        assert!(!scheme.verify(&public, &[2u8; DIGEST_LEN], &sig).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_short_private_key() {
        let err = Ed25519Scheme.sign(&[1, 2, 3], &[0u8; DIGEST_LEN]).await.unwrap_err();
        assert!(matches!(err, LicenseKeyError::Signing(_)));
    }

    #[tokio::test]
    async fn garbage_inputs_do_not_verify() {
        let digest = [0u8; DIGEST_LEN];
        assert!(!Ed25519Scheme.verify(&[0u8; 5], &digest, &[0u8; 64]).await.unwrap());
        let public = Ed25519Scheme::public_key_for(&SEED).unwrap();
        assert!(!Ed25519Scheme.verify(&public, &digest, &[0u8; 10]).await.unwrap());
    }
}
