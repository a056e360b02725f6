//! Secret Vault 모듈
//!
//! 바이너리에 봉인된 AdMob 키를 서명 검증 후에만 복호화해 제공합니다.
//!
//! - 봉인 값: base64(nonce || ChaCha20-Poly1305 암호문), AAD = 키 이름
//! - 복호화 키는 바이너리에 내장 (정적 분석을 막는 수준의 난독화)
//! - 상태가 없으므로 여러 스레드에서 동시에 사용 가능

pub mod catalog;
pub mod sealed;
pub mod vault;

pub use catalog::{SecretCatalog, SecretName};
pub use sealed::{open, seal};
pub use vault::{SecretVault, VaultError};
