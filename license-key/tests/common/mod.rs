//! Shared test helpers for license key tests.

#![allow(dead_code)]

use license_key::{Ed25519Scheme, LicenseData, Secp256k1Scheme};

/// Fixed Ed25519 seed used across tests.
pub const ED25519_SEED: [u8; 32] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32,
];

/// Fixed secp256k1 secret key used across tests.
pub const SECP256K1_SECRET: [u8; 32] = [
    0x4c, 0x0e, 0x2a, 0x8f, 0x19, 0x71, 0xd3, 0x5b, 0x62, 0x0a, 0x94, 0x3e, 0xc7, 0x21, 0x58, 0xb6,
    0x0f, 0x83, 0x4d, 0xe9, 0x36, 0x7c, 0xa1, 0x12, 0x5e, 0xf0, 0x29, 0x6d, 0x88, 0xb4, 0x03, 0x97,
];

/// Returns a deterministic Ed25519 key pair `(private, public)`.
pub fn ed25519_keypair() -> (Vec<u8>, Vec<u8>) {
    let public = Ed25519Scheme::public_key_for(&ED25519_SEED).expect("valid seed");
    (ED25519_SEED.to_vec(), public)
}

/// Returns a second, unrelated Ed25519 key pair.
pub fn other_ed25519_keypair() -> (Vec<u8>, Vec<u8>) {
    let seed = [0xEE; 32];
    let public = Ed25519Scheme::public_key_for(&seed).expect("valid seed");
    (seed.to_vec(), public)
}

/// Returns a deterministic secp256k1 key pair `(private, uncompressed public)`.
pub fn secp256k1_keypair() -> (Vec<u8>, Vec<u8>) {
    let public = Secp256k1Scheme::public_key_for(&SECP256K1_SECRET).expect("valid secret");
    (SECP256K1_SECRET.to_vec(), public)
}

/// The `{product: "Acme", seats: 5}` payload.
pub fn acme_data() -> LicenseData {
    LicenseData::new().with("product", "Acme").with("seats", 5)
}

/// Installs a test subscriber so `RUST_LOG=license_key=debug` shows traces.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
