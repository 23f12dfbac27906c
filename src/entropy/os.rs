//! Operating system CSPRNG handle.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Per-invocation handle to the OS secure random source.
///
/// Holds no state of its own; every draw goes to the kernel
/// (`getrandom(2)` on Linux). Failures surface through `try_fill_bytes`.
#[derive(Debug, Default)]
pub struct SecureSource(OsRng);

impl SecureSource {
    pub fn new() -> Self {
        Self(OsRng)
    }

    pub fn name(&self) -> &'static str {
        "os (getrandom)"
    }
}

impl RngCore for SecureSource {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureSource {}
