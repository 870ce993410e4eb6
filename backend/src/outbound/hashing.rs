//! Password hashing adapter.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::ports::PasswordHasher;

/// Salted SHA-256 password hasher.
///
/// Produces `salt$digest` with both parts hex encoded. A fresh 16-byte salt
/// is drawn per call, so equal plaintexts hash to distinct stored values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    fn encode(&self, plaintext: &str) -> String {
        let mut salt = [0_u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);

        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(plaintext.as_bytes());
        let digest = hasher.finalize();

        format!("{}${}", hex::encode(salt), hex::encode(digest))
    }
}
