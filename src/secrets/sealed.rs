//! 시크릿 봉인/복호화
//!
//! 저장 포맷 (standard base64 텍스트):
//! - nonce: 12 bytes (ChaCha20-Poly1305)
//! - ciphertext: AEAD 결과 (= 암호문 + 16 bytes 태그)
//!
//! AAD: 시크릿 키 이름 (다른 이름으로 옮겨진 값은 복호화 실패)
//! 암호 키: SHA-256(내장 키 문자열)

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::Rng;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use super::vault::VaultError;

/// 암호 키 길이 (256-bit)
pub const KEY_LEN: usize = 32;

/// Nonce 길이 (ChaCha20-Poly1305용 12 bytes)
pub const NONCE_LEN: usize = 12;

/// Poly1305 태그 길이
pub const TAG_LEN: usize = 16;

/// 내장 키 문자열에서 암호 키 유도
fn derive_key(embedded_key: &str) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&Sha256::digest(embedded_key.as_bytes()));
    key
}

/// 평문을 저장 포맷으로 봉인
pub fn seal(embedded_key: &str, name: &str, plaintext: &str) -> Result<String, VaultError> {
    let key = derive_key(embedded_key);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_slice()));

    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill(&mut nonce);

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: plaintext.as_bytes(),
                aad: name.as_bytes(),
            },
        )
        .map_err(|e| VaultError::EncryptionFailed(e.to_string()))?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(blob))
}

/// 저장 포맷을 디코딩하고 복호화
pub fn open(embedded_key: &str, name: &str, at_rest: &str) -> Result<String, VaultError> {
    let blob = BASE64
        .decode(at_rest.trim())
        .map_err(|e| VaultError::DecryptionFailure(format!("invalid encoding: {}", e)))?;

    if blob.len() < NONCE_LEN + TAG_LEN {
        return Err(VaultError::DecryptionFailure(format!(
            "sealed value too short ({} bytes)",
            blob.len()
        )));
    }
    let (nonce, ciphertext) = blob.split_at(NONCE_LEN);

    let key = derive_key(embedded_key);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_slice()));

    let plaintext = cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: name.as_bytes(),
            },
        )
        .map_err(|_| VaultError::DecryptionFailure("authentication failed".to_string()))?;

    String::from_utf8(plaintext).map_err(|e| {
        let mut bytes = e.into_bytes();
        bytes.zeroize();
        VaultError::DecryptionFailure("plaintext is not valid UTF-8".to_string())
    })
}
