//! Digest helpers for workout integrity checks

use sha2::{Digest, Sha256};

/// Raw SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 of `data` as 64 lowercase hex characters
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Whether two hex digests name the same bytes
///
/// Case and surrounding whitespace are ignored. Anything that is not valid
/// hex on either side is a mismatch. The byte comparison does not stop at
/// the first difference.
pub fn hex_digest_eq(server: &str, local: &str) -> bool {
    let (Ok(server), Ok(local)) = (hex::decode(server.trim()), hex::decode(local.trim())) else {
        return false;
    };
    server.len() == local.len()
        && server
            .iter()
            .zip(&local)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
