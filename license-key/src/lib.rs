//! Signed, human-readable license keys.
//!
//! An issuer holding a private key turns a flat key-value mapping into a
//! license key; anyone with the matching public key can check it and read
//! the data back.
//!
//! # License Key Format
//!
//! ```text
//! -----BEGIN LICENSE KEY-----
//! product: Acme
//! seats: 5
//!
//! 304402206F1C7E5D0B4A3F2E1D0C9B8A
//! ...
//! -----END LICENSE KEY-----
//! ```
//!
//! The data block is the canonical `key: value` encoding, one entry per
//! line in insertion order. The signature block is the uppercase hex
//! signature over `SHA-256(data block)`, wrapped at 32 characters.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> license_key::LicenseKeyResult<()> {
//! use license_key::{generate, verify, Ed25519Scheme, LicenseData};
//!
//! let private_key = [42u8; 32];
//! let public_key = Ed25519Scheme::public_key_for(&private_key)?;
//!
//! let data = LicenseData::new().with("product", "Acme").with("seats", 5);
//! let token = generate(&Ed25519Scheme, &data, &private_key).await?;
//! let verified = verify(&Ed25519Scheme, &token, &public_key).await?;
//! assert_eq!(verified.get("seats"), Some("5"));
//! # Ok(())
//! # }
//! ```

mod data;
mod encoding;
mod error;
mod framing;
mod scheme;
mod sign;
mod signature;
mod verify;

pub use data::LicenseData;
pub use encoding::{decode, encode, SEPARATOR};
pub use error::{LicenseKeyError, LicenseKeyResult};
pub use framing::{frame, unframe, FramedToken, FOOTER, HEADER};
pub use scheme::SignatureScheme;
pub use sign::generate;
pub use signature::{digest, format_signature, parse_signature, DIGEST_LEN, SIGNATURE_LINE_WIDTH};
pub use verify::verify;

#[cfg(feature = "ed25519")]
pub use scheme::Ed25519Scheme;
#[cfg(feature = "secp256k1")]
pub use scheme::Secp256k1Scheme;
