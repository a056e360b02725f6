//! Secret Vault - 서명 검증 후 시크릿 복호화
//!
//! - 모든 조회는 서명 검증부터 다시 수행 (검증 결과를 캐시하지 않음)
//! - 검증 실패 시 복호화를 시도하지 않음
//! - 평문은 반환값으로만 존재하며 로그에 남기지 않음

use std::collections::BTreeMap;

use crate::integrity::IntegrityVerifier;
use crate::secrets::catalog::{SecretCatalog, SecretName};
use crate::secrets::sealed;

/// Vault 오류
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VaultError {
    #[error("App signature verification failed")]
    IntegrityFailure,

    #[error("Failed to decrypt secret: {0}")]
    DecryptionFailure(String),

    #[error("Unknown secret: {0}")]
    UnknownSecret(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}

/// 시크릿 Vault
///
/// 변경 가능한 상태가 없으므로 `Arc`나 Tauri managed state로 공유해 사용합니다.
#[derive(Debug, Clone)]
pub struct SecretVault {
    verifier: IntegrityVerifier,
    catalog: SecretCatalog,
}

impl SecretVault {
    /// 내장 시크릿 테이블로 생성
    pub fn new(verifier: IntegrityVerifier) -> Self {
        Self::with_catalog(verifier, SecretCatalog::embedded())
    }

    pub fn with_catalog(verifier: IntegrityVerifier, catalog: SecretCatalog) -> Self {
        tracing::info!(
            expected = verifier.expected_fingerprint(),
            secrets = SecretName::ALL.len(),
            "secret vault ready"
        );
        Self { verifier, catalog }
    }

    pub fn verifier(&self) -> &IntegrityVerifier {
        &self.verifier
    }

    /// 시크릿 조회
    pub fn get(&self, name: SecretName) -> Result<String, VaultError> {
        if !self.verifier.check() {
            tracing::warn!(secret = %name, "refusing secret: integrity check failed");
            return Err(VaultError::IntegrityFailure);
        }

        let result = sealed::open(self.catalog.key(), name.as_str(), self.catalog.sealed(name));
        match &result {
            Ok(_) => tracing::debug!(secret = %name, "secret released"),
            Err(e) => tracing::warn!(secret = %name, error = %e, "secret could not be opened"),
        }
        result
    }

    /// 키 이름 문자열로 조회
    pub fn get_by_key(&self, key: &str) -> Result<String, VaultError> {
        let name: SecretName = key.parse().map_err(VaultError::UnknownSecret)?;
        self.get(name)
    }

    /// 모든 시크릿 조회
    ///
    /// 하나라도 실패하면 첫 번째 오류를 그대로 반환하고 부분 결과는 버립니다.
    pub fn get_all(&self) -> Result<BTreeMap<String, String>, VaultError> {
        SecretName::ALL
            .into_iter()
            .map(|name| -> Result<(String, String), VaultError> {
                Ok((name.as_str().to_string(), self.get(name)?))
            })
            .collect()
    }
}
