//! Vault 설정
//!
//! 기대 서명 지문은 필수 설정값입니다. 동작하는 기본값은 제공하지 않습니다.
//!
//! - `SECURE_KEYS_EXPECTED_SIGNATURE`: 64자리 소문자 hex SHA-256 지문 (필수)
//! - `SECURE_KEYS_CERTIFICATE`: 서명 인증서 파일 경로 (DER/PEM)

use std::path::PathBuf;
use std::sync::Arc;

use crate::integrity::{CertificateFile, IntegrityVerifier, SigningIdentitySource, FINGERPRINT_LEN};
use crate::secrets::SecretVault;

pub const EXPECTED_SIGNATURE_VAR: &str = "SECURE_KEYS_EXPECTED_SIGNATURE";
pub const CERTIFICATE_VAR: &str = "SECURE_KEYS_CERTIFICATE";

/// 설정 오류
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid signature fingerprint (expected 64 lowercase hex chars): {0}")]
    InvalidFingerprint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    pub expected_fingerprint: String,
    pub certificate_path: Option<PathBuf>,
}

impl VaultConfig {
    pub fn new(expected_fingerprint: impl Into<String>) -> Result<Self, ConfigError> {
        let expected_fingerprint = expected_fingerprint.into();
        validate_fingerprint(&expected_fingerprint)?;
        Ok(Self {
            expected_fingerprint,
            certificate_path: None,
        })
    }

    pub fn with_certificate(mut self, path: impl Into<PathBuf>) -> Self {
        self.certificate_path = Some(path.into());
        self
    }

    /// 환경 변수에서 설정 로드
    ///
    /// `.env` 파일이 있으면 먼저 로드합니다 (없어도 무시).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 key → value 조회 함수로 설정 구성
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expected = lookup(EXPECTED_SIGNATURE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(EXPECTED_SIGNATURE_VAR))?;

        let mut config = Self::new(expected)?;
        if let Some(path) = lookup(CERTIFICATE_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_certificate(path.trim());
        }
        Ok(config)
    }

    /// 주어진 서명 공급자로 Vault 생성
    pub fn build_vault_with(&self, source: Arc<dyn SigningIdentitySource>) -> SecretVault {
        let verifier = IntegrityVerifier::new(source, self.expected_fingerprint.clone());
        SecretVault::new(verifier)
    }

    /// 설정된 인증서 파일로 Vault 생성
    pub fn build_vault(&self) -> Result<SecretVault, ConfigError> {
        let path = self
            .certificate_path
            .clone()
            .ok_or(ConfigError::Missing(CERTIFICATE_VAR))?;
        Ok(self.build_vault_with(Arc::new(CertificateFile::new(path))))
    }
}

/// 지문 형식 검사 (소문자 hex 64자)
pub fn validate_fingerprint(value: &str) -> Result<(), ConfigError> {
    let valid = value.len() == FINGERPRINT_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidFingerprint(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::{fingerprint, StaticIdentity};
    use crate::secrets::SecretName;
    use std::collections::HashMap;
    use std::io::Write;

    const CERT: &[u8] = b"config-test-certificate";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_fingerprint_is_rejected() {
        let result = VaultConfig::from_lookup(lookup(&[]));
        assert!(matches!(
            result,
            Err(ConfigError::Missing(EXPECTED_SIGNATURE_VAR))
        ));

        let result = VaultConfig::from_lookup(lookup(&[(EXPECTED_SIGNATURE_VAR, "  ")]));
        assert!(matches!(result, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_placeholder_fingerprint_is_rejected() {
        let result = VaultConfig::from_lookup(lookup(&[(
            EXPECTED_SIGNATURE_VAR,
            "your_app_signature_hash_here",
        )]));
        assert!(matches!(result, Err(ConfigError::InvalidFingerprint(_))));
    }

    #[test]
    fn test_uppercase_or_colon_fingerprint_is_rejected() {
        let fp = fingerprint(CERT);
        assert!(validate_fingerprint(&fp).is_ok());
        assert!(validate_fingerprint(&fp.to_uppercase()).is_err());

        let colon = fp
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect::<Vec<_>>()
            .join(":");
        assert!(validate_fingerprint(&colon).is_err());
    }

    #[test]
    fn test_valid_config_with_certificate() {
        let fp = fingerprint(CERT);
        let config = VaultConfig::from_lookup(lookup(&[
            (EXPECTED_SIGNATURE_VAR, fp.as_str()),
            (CERTIFICATE_VAR, "/opt/app/signing.pem"),
        ]))
        .unwrap();

        assert_eq!(config.expected_fingerprint, fp);
        assert_eq!(
            config.certificate_path,
            Some(PathBuf::from("/opt/app/signing.pem"))
        );
    }

    #[test]
    fn test_build_vault_requires_certificate_path() {
        let config = VaultConfig::new(fingerprint(CERT)).unwrap();
        assert!(matches!(
            config.build_vault(),
            Err(ConfigError::Missing(CERTIFICATE_VAR))
        ));
    }

    #[test]
    fn test_build_vault_from_certificate_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CERT).unwrap();

        let vault = VaultConfig::new(fingerprint(CERT))
            .unwrap()
            .with_certificate(file.path())
            .build_vault()
            .unwrap();

        assert!(vault.verifier().check());
        assert!(vault.get(SecretName::AppId).is_ok());
    }

    #[test]
    fn test_build_vault_with_custom_source() {
        let config = VaultConfig::new(fingerprint(CERT)).unwrap();
        let vault = config.build_vault_with(Arc::new(StaticIdentity::single(b"other".to_vec())));
        assert!(!vault.verifier().check());
    }
}
