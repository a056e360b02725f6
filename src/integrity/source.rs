//! 서명 인증서 공급자
//!
//! 실행 중인 앱의 서명 인증서를 읽어오는 방법을 추상화합니다.
//! 플랫폼별 구현은 호스트가 제공하고, 테스트에서는 고정 인증서를 사용합니다.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fs;
use std::path::{Path, PathBuf};

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// 서명 메타데이터 읽기 오류
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No signing certificates found")]
    NoCertificates,

    #[error("Invalid PEM certificate: {0}")]
    InvalidPem(String),
}

/// 실행 중인 앱의 서명 인증서 목록을 제공
///
/// 반환 순서는 플랫폼이 보고하는 순서 그대로이며, 검증은 첫 번째 인증서만 사용합니다.
pub trait SigningIdentitySource: Send + Sync {
    fn signing_certificates(&self) -> Result<Vec<Vec<u8>>, IdentityError>;
}

/// 메모리에 보관된 인증서 목록
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    certificates: Vec<Vec<u8>>,
}

impl StaticIdentity {
    pub fn new(certificates: Vec<Vec<u8>>) -> Self {
        Self { certificates }
    }

    pub fn single(certificate: impl Into<Vec<u8>>) -> Self {
        Self {
            certificates: vec![certificate.into()],
        }
    }
}

impl SigningIdentitySource for StaticIdentity {
    fn signing_certificates(&self) -> Result<Vec<Vec<u8>>, IdentityError> {
        Ok(self.certificates.clone())
    }
}

/// 디스크의 인증서 파일 (DER 또는 PEM)
///
/// 호출할 때마다 파일을 새로 읽습니다.
#[derive(Debug, Clone)]
pub struct CertificateFile {
    path: PathBuf,
}

impl CertificateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SigningIdentitySource for CertificateFile {
    fn signing_certificates(&self) -> Result<Vec<Vec<u8>>, IdentityError> {
        let bytes = fs::read(&self.path)?;
        parse_certificates(&bytes)
    }
}

/// 인증서 파일 내용을 DER 바이트 목록으로 변환
///
/// PEM 헤더가 있으면 모든 CERTIFICATE 블록을 파일 순서대로 디코딩하고,
/// 없으면 파일 전체를 DER 하나로 취급합니다.
pub fn parse_certificates(bytes: &[u8]) -> Result<Vec<Vec<u8>>, IdentityError> {
    if bytes.is_empty() {
        return Err(IdentityError::NoCertificates);
    }

    let text = match std::str::from_utf8(bytes) {
        Ok(text) if text.contains(PEM_BEGIN) => text,
        _ => return Ok(vec![bytes.to_vec()]),
    };

    let mut certificates = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(PEM_BEGIN) {
        let after_begin = &rest[start + PEM_BEGIN.len()..];
        let end = after_begin
            .find(PEM_END)
            .ok_or_else(|| IdentityError::InvalidPem("missing END marker".to_string()))?;

        let body: String = after_begin[..end]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let der = BASE64
            .decode(body.as_bytes())
            .map_err(|e| IdentityError::InvalidPem(e.to_string()))?;
        if der.is_empty() {
            return Err(IdentityError::InvalidPem("empty certificate body".to_string()));
        }
        certificates.push(der);

        rest = &after_begin[end + PEM_END.len()..];
    }

    Ok(certificates)
}
