use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};

/// Preimage hashed for every padding leaf of a Merkle tree
pub const DUMMY_PREIMAGE: &str = "DUMMY";

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// SHA-256 of the UTF-8 bytes of `input`, rendered as lowercase hex
pub fn digest(input: &str) -> String {
    HEXLOWER.encode(&sha256_digest(input.as_bytes()))
}

/// Parent hash of two child hashes.
///
/// Each argument is hashed as a *string* (not as decoded digest bytes), the two
/// 32-byte digests are XORed position-wise and the result is hex encoded. The
/// XOR step is linear and commutative, so `combine(a, b) == combine(b, a)`.
pub fn combine(left: &str, right: &str) -> String {
    let left = sha256_digest(left.as_bytes());
    let right = sha256_digest(right.as_bytes());
    let mixed: Vec<u8> = left.iter().zip(right.iter()).map(|(l, r)| l ^ r).collect();
    HEXLOWER.encode(&mixed)
}
