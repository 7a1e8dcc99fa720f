// crates/palisade-core/src/identity.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PalisadeError;

/// Opaque identity of a caller on the Palisade network.
///
/// A principal is a raw 32-byte key. The protocol attaches no meaning to
/// the bytes: key derivation, signatures, and custody belong to the host
/// chain, which authenticates callers before handing the protocol a
/// principal. Equality is byte equality.
///
/// Principals are hex-encoded (64 lowercase hex characters) wherever they
/// cross a serialized boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Principal(pub [u8; 32]);

impl Principal {
    /// Byte length of a principal key.
    pub const LEN: usize = 32;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a principal from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, PalisadeError> {
        let bytes = hex::decode(s)
            .map_err(|_| PalisadeError::Encoding(format!("invalid hex principal: {}", s)))?;
        if bytes.len() != Self::LEN {
            return Err(PalisadeError::Encoding(format!(
                "principal must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }
        let mut out = [0u8; Self::LEN];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.to_hex())
    }
}

impl FromStr for Principal {
    type Err = PalisadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Principal::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
