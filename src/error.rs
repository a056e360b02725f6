//! Secure Keys Error Types
//!
//! 웹뷰 경계를 넘는 명령 응답용 에러 타입 정의

use serde::Serialize;

/// 웹뷰로 전달되는 보안 관련 에러 코드
pub const SECURITY_ERROR: &str = "SECURITY_ERROR";

/// 명령 응답용 직렬화 가능한 에러
///
/// 내부 에러 타입이나 스택 정보는 절대 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl CommandError {
    /// `SECURITY_ERROR` 코드의 에러 생성
    pub fn security(message: impl Into<String>, details: Option<String>) -> Self {
        CommandError {
            code: SECURITY_ERROR.to_string(),
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandError {}

/// 명령 결과 타입
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_error_serializes_with_code() {
        let err = CommandError::security(
            "Failed to get AdMob App ID",
            Some("App signature verification failed".to_string()),
        );
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "SECURITY_ERROR");
        assert_eq!(json["message"], "Failed to get AdMob App ID");
        assert_eq!(json["details"], "App signature verification failed");
    }

    #[test]
    fn test_display_includes_details_when_present() {
        let err = CommandError::security("Failed", None);
        assert_eq!(err.to_string(), "[SECURITY_ERROR] Failed");

        let err = CommandError::security("Failed", Some("why".to_string()));
        assert_eq!(err.to_string(), "[SECURITY_ERROR] Failed: why");
    }
}
