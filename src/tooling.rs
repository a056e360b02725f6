//! `secure-keys` 도구 동작
//!
//! 각 하위 명령은 출력할 줄을 반환하고, 실제 출력은 바이너리가 담당합니다.
//! 어떤 명령도 복호화된 값을 출력하지 않습니다.

use std::path::Path;

use crate::config::ConfigError;
use crate::integrity::{fingerprint, parse_certificates, IdentityError};
use crate::secrets::{SecretCatalog, SecretName, SecretVault, VaultError};

/// 도구 실행 오류
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{0}")]
    Identity(#[from] IdentityError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Vault(#[from] VaultError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("integrity check failed")]
    IntegrityFailed,

    #[error("one or more secrets could not be opened")]
    SecretsUnavailable,
}

/// 인증서 파일의 첫 번째 인증서 지문
pub fn fingerprint_file(path: &Path) -> Result<String, ToolError> {
    let bytes = std::fs::read(path)?;
    let certificates = parse_certificates(&bytes)?;
    let first = certificates.first().ok_or(IdentityError::NoCertificates)?;
    Ok(fingerprint(first))
}

/// stdin 입력 끝의 줄바꿈 하나만 제거 (`\n` 또는 `\r\n`)
pub fn strip_line_ending(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

/// 입력 평문을 봉인 값으로 변환
pub fn seal_input(
    catalog: &SecretCatalog,
    name: SecretName,
    input: &str,
) -> Result<String, ToolError> {
    Ok(catalog.seal(name, strip_line_ending(input))?)
}

/// `check` 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub lines: Vec<String>,
    pub outcome: Result<(), CheckFailure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFailure {
    Integrity,
    Secrets,
}

impl From<CheckFailure> for ToolError {
    fn from(failure: CheckFailure) -> Self {
        match failure {
            CheckFailure::Integrity => ToolError::IntegrityFailed,
            CheckFailure::Secrets => ToolError::SecretsUnavailable,
        }
    }
}

/// 서명 검증 후 각 시크릿의 복호화 가능 여부만 보고
pub fn check_vault(vault: &SecretVault) -> CheckReport {
    if !vault.verifier().check() {
        return CheckReport {
            lines: vec!["integrity: failed".to_string()],
            outcome: Err(CheckFailure::Integrity),
        };
    }

    let mut lines = vec!["integrity: ok".to_string()];
    let mut outcome = Ok(());
    for name in SecretName::ALL {
        match vault.get(name) {
            Ok(_) => lines.push(format!("{}: ok", name)),
            Err(e) => {
                outcome = Err(CheckFailure::Secrets);
                lines.push(format!("{}: {}", name, e));
            }
        }
    }

    CheckReport { lines, outcome }
}
