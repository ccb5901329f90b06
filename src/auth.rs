use sha2::{Digest, Sha256};

/// Login state for one interactive run. Handlers receive this explicitly;
/// nothing about authentication lives in global state.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check the shared passphrase against the configured digest. Returns
    /// whether the attempt succeeded; a failure leaves the session locked.
    pub fn login(&mut self, expected_digest_hex: &str, passphrase: &str) -> bool {
        if verify(expected_digest_hex, passphrase) {
            self.authenticated = true;
        }
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

pub fn digest_hex(passphrase: &str) -> String {
    format!("{:x}", Sha256::digest(passphrase.as_bytes()))
}

/// Digest comparison without an early exit, so timing does not leak the
/// matching prefix length.
pub fn verify(expected_digest_hex: &str, passphrase: &str) -> bool {
    let actual = digest_hex(passphrase);
    let expected = expected_digest_hex.trim().to_lowercase();
    if expected.len() != actual.len() {
        return false;
    }
    expected
        .bytes()
        .zip(actual.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
