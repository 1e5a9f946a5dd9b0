//! ECDSA over secp256k1.
//!
//! Signatures are DER encoded and keys use the usual SEC1 layouts (32-byte
//! secret, 33- or 65-byte public key), which keeps tokens interchangeable
//! with eccrypto-based issuers.

use async_trait::async_trait;
use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use tracing::debug;

use super::SignatureScheme;
use crate::error::{LicenseKeyError, LicenseKeyResult};
use crate::signature::DIGEST_LEN;

/// secp256k1 ECDSA signatures over the digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Scheme;

impl Secp256k1Scheme {
    /// Derives the 65-byte uncompressed public key for a 32-byte secret key.
    pub fn public_key_for(private_key: &[u8]) -> LicenseKeyResult<Vec<u8>> {
        let secret = secret_key(private_key)?;
        let public = PublicKey::from_secret_key(&Secp256k1::signing_only(), &secret);
        Ok(public.serialize_uncompressed().to_vec())
    }
}

fn secret_key(private_key: &[u8]) -> LicenseKeyResult<SecretKey> {
    SecretKey::from_slice(private_key)
        .map_err(|e| LicenseKeyError::Signing(format!("invalid secp256k1 private key: {e}")))
}

#[async_trait]
impl SignatureScheme for Secp256k1Scheme {
    fn name(&self) -> &'static str {
        "secp256k1"
    }

    async fn sign(&self, private_key: &[u8], digest: &[u8; DIGEST_LEN]) -> LicenseKeyResult<Vec<u8>> {
        let secret = secret_key(private_key)?;
        let message = Message::from_digest(*digest);
        let sig = Secp256k1::signing_only().sign_ecdsa(&message, &secret);
        Ok(sig.serialize_der().to_vec())
    }

    async fn verify(
        &self,
        public_key: &[u8],
        digest: &[u8; DIGEST_LEN],
        signature: &[u8],
    ) -> LicenseKeyResult<bool> {
        let Ok(public) = PublicKey::from_slice(public_key) else {
            debug!(len = public_key.len(), "secp256k1 public key is invalid");
            return Ok(false);
        };
        let Ok(mut sig) = Signature::from_der(signature) else {
            debug!(len = signature.len(), "secp256k1 signature is not valid DER");
            return Ok(false);
        };
        // Other issuers may emit high-S signatures.
        sig.normalize_s();
        let message = Message::from_digest(*digest);
        Ok(Secp256k1::verification_only()
            .verify_ecdsa(&message, &sig, &public)
            .is_ok())
    }
}
