//! Content Hash Value Object
//!
//! A fixed-size digest of a file's bytes. Two fingerprints with equal
//! hashes describe the same content no matter what their timestamps say.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a SHA-256 digest. Displayed with the `sha256:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Prefix used when rendering
    pub const PREFIX: &'static str = "sha256:";

    /// Hash an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    /// Hash everything a reader yields, without buffering it all
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(Self(hasher.finalize().into()))
    }

    /// Lowercase hex digest without prefix
    pub fn hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.hex())
    }
}
