//! Password generation.

use std::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::charset::Pool;
use super::request::GenerationRequest;
use crate::entropy::{self, SecureSource};
use crate::error::Result;

/// A generated secret. Wiped from memory on drop.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars, redacted)", self.0.len())
    }
}

/// Generate one password for `request` from a fresh OS source handle.
pub fn generate(request: &GenerationRequest) -> Result<Password> {
    let pool = request.pool()?;
    let mut rng = SecureSource::new();

    log::debug!(
        "generating {} chars from a {}-char pool [{}] via {}",
        request.length(),
        pool.len(),
        request
            .classes()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", "),
        rng.name()
    );

    generate_from_pool(&pool, request.length(), &mut rng)
}

/// Draw `length` independent, uniform characters from `pool`.
///
/// Either the whole password is produced or an error is returned; a
/// partially filled buffer is dropped (and zeroed) on failure.
pub fn generate_from_pool<R: RngCore + CryptoRng>(
    pool: &Pool,
    length: usize,
    rng: &mut R,
) -> Result<Password> {
    let chars = pool.as_bytes();
    let mut buf = Zeroizing::new(String::with_capacity(length));

    for _ in 0..length {
        let index = entropy::bounded_index(rng, chars.len())?;
        buf.push(chars[index] as char);
    }

    Ok(Password(buf))
}
