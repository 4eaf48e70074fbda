use hex;
use tiny_keccak::{Hasher, Keccak};

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut hasher = Keccak::v256();
    let mut o = vec![0u8; 32];
    hasher.update(i);
    hasher.finalize(&mut o);
    return o;
}

pub fn get_identifier_digest(identifier: &str) -> Vec<u8> {
    keccak256(identifier.as_bytes())
}

pub fn get_content_hash_message(content_hash: &str) -> Vec<u8> {
    keccak256(content_hash.as_bytes())
}

pub fn get_deletion_message(digest: &[u8]) -> Vec<u8> {
    keccak256(digest)
}

pub fn get_secondary_message(digest: &[u8], primary_digest: &[u8]) -> Vec<u8> {
    keccak256(&[digest, primary_digest].concat())
}

// ecrecover-style address: keccak tail of the raw curve point, SEC1 tag stripped
pub fn derive_signer_address(public_key: &[u8]) -> Vec<u8> {
    let key = match public_key.first() {
        Some(&0x04) => &public_key[1..],
        _ => public_key,
    };
    let hash = keccak256(key);
    hash[12..].to_vec()
}

pub fn convert_digest_to_hex_string(digest: &[u8]) -> String {
    hex::encode(digest)
}
