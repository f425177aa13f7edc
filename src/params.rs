//! AES cipher parameter record for encrypted entries.
//!
//! # Scope
//! Plain settings record consumed by encryption-aware source providers; no
//! algorithmic content lives here.
//!
//! # Design Notes
//! - The secret is wiped (zero-filled, then cleared) on `reset` and on
//!   drop.
//! - `Debug` never prints the secret.

use serde::{Deserialize, Serialize};

/// AES key strength in bits.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AesKeyStrength {
    Bits128 = 0,
    Bits192 = 1,
    #[default]
    Bits256 = 2,
}

impl AesKeyStrength {
    /// All supported strengths, weakest first.
    pub const ALL: [AesKeyStrength; 3] = [Self::Bits128, Self::Bits192, Self::Bits256];

    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits192 => 192,
            Self::Bits256 => 256,
        }
    }

    /// Key length in bytes.
    #[inline]
    pub fn key_len(self) -> usize {
        self.bits() as usize / 8
    }
}

/// AES cipher parameters: a secret plus a key strength.
///
/// Fresh instances carry an empty secret and the strongest supported key.
#[derive(Default)]
pub struct AesCipherParams {
    secret: Vec<u8>,
    key_strength: AesKeyStrength,
}

impl AesCipherParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the secret, wiping the previous value first.
    pub fn set_secret(&mut self, secret: &[u8]) {
        self.wipe();
        self.secret.extend_from_slice(secret);
    }

    #[inline]
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    #[inline]
    pub fn key_strength(&self) -> AesKeyStrength {
        self.key_strength
    }

    pub fn set_key_strength(&mut self, strength: AesKeyStrength) {
        self.key_strength = strength;
    }

    /// Wipes the secret and restores the default key strength.
    pub fn reset(&mut self) {
        self.wipe();
        self.key_strength = AesKeyStrength::default();
    }

    fn wipe(&mut self) {
        self.secret.fill(0);
        self.secret.clear();
    }
}

impl Drop for AesCipherParams {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl std::fmt::Debug for AesCipherParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCipherParams")
            .field("secret", &"<redacted>")
            .field("key_strength", &self.key_strength)
            .finish()
    }
}
