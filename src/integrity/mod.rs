//! 앱 서명 무결성 검증
//!
//! 실행 중인 앱의 첫 번째 서명 인증서를 SHA-256으로 해시해
//! 빌드 시 고정된 지문과 비교합니다. 모든 오류는 검증 실패로 처리합니다 (fail-closed).

pub mod source;

pub use source::{
    parse_certificates, CertificateFile, IdentityError, SigningIdentitySource, StaticIdentity,
};

use sha2::{Digest, Sha256};
use std::sync::Arc;

/// 지문 길이 (SHA-256 hex = 64자)
pub const FINGERPRINT_LEN: usize = 64;

/// 인증서 바이트의 SHA-256 지문 (소문자 hex)
pub fn fingerprint(certificate: &[u8]) -> String {
    hex::encode(Sha256::digest(certificate))
}

/// 서명 지문 검증기
#[derive(Clone)]
pub struct IntegrityVerifier {
    source: Arc<dyn SigningIdentitySource>,
    expected: String,
}

impl IntegrityVerifier {
    /// 기대 지문은 정확히 일치해야 하며 대소문자/구분자 정규화는 하지 않습니다.
    pub fn new(source: Arc<dyn SigningIdentitySource>, expected: impl Into<String>) -> Self {
        Self {
            source,
            expected: expected.into(),
        }
    }

    pub fn expected_fingerprint(&self) -> &str {
        &self.expected
    }

    /// 현재 앱의 서명이 기대 지문과 일치하는지 확인
    ///
    /// 첫 번째 인증서만 사용합니다. 서명 키 교체로 인증서가 여러 개인 앱은
    /// 첫 번째 인증서가 고정 지문과 같을 때만 통과합니다.
    pub fn check(&self) -> bool {
        let certificates = match self.source.signing_certificates() {
            Ok(certificates) => certificates,
            Err(e) => {
                tracing::warn!(error = %e, "signing metadata unavailable");
                return false;
            }
        };

        let Some(first) = certificates.first() else {
            tracing::warn!("no signing certificate reported");
            return false;
        };

        let actual = fingerprint(first);
        if actual == self.expected {
            true
        } else {
            tracing::warn!(
                observed = &actual[..16],
                "signing fingerprint does not match pinned value"
            );
            false
        }
    }
}

impl std::fmt::Debug for IntegrityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrityVerifier")
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}
