//! Secure AdMob Config 명령어
//!
//! 웹뷰(신뢰도 낮은 호출자)가 이름으로 요청하는 메서드를 SecretVault 조회로 연결합니다.
//! - 모든 실패는 `SECURITY_ERROR` 코드로 변환되어 내부 오류 타입은 경계를 넘지 않음
//! - 알 수 없는 메서드는 보안 오류가 아닌 "not implemented"로 응답

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{CommandError, CommandResult};
use crate::secrets::{SecretName, SecretVault, VaultError};

/// 웹뷰가 요청할 수 있는 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GetAdMobAppId,
    GetBannerAdUnitId,
    GetInterstitialAdUnitId,
    GetRewardedAdUnitId,
    GetAllKeys,
}

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getAdMobAppId" => Some(Method::GetAdMobAppId),
            "getBannerAdUnitId" => Some(Method::GetBannerAdUnitId),
            "getInterstitialAdUnitId" => Some(Method::GetInterstitialAdUnitId),
            "getRewardedAdUnitId" => Some(Method::GetRewardedAdUnitId),
            "getAllKeys" => Some(Method::GetAllKeys),
            _ => None,
        }
    }

    /// 단일 시크릿 메서드의 대상 (`getAllKeys`는 None)
    pub fn secret(self) -> Option<SecretName> {
        match self {
            Method::GetAdMobAppId => Some(SecretName::AppId),
            Method::GetBannerAdUnitId => Some(SecretName::BannerAdUnitId),
            Method::GetInterstitialAdUnitId => Some(SecretName::InterstitialAdUnitId),
            Method::GetRewardedAdUnitId => Some(SecretName::RewardedAdUnitId),
            Method::GetAllKeys => None,
        }
    }
}

/// 성공 응답 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MethodValue {
    Text(String),
    Keys(BTreeMap<String, String>),
}

/// 메서드 호출 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    Success { value: MethodValue },
    Error(CommandError),
    NotImplemented { method: String },
}

fn map_vault_error(message: String, err: VaultError) -> CommandError {
    CommandError::security(message, Some(err.to_string()))
}

/// 단일 시크릿 조회
pub fn get_secret(vault: &SecretVault, name: SecretName) -> CommandResult<String> {
    vault
        .get(name)
        .map_err(|e| map_vault_error(format!("Failed to get {}", name.label()), e))
}

/// 모든 시크릿 조회
pub fn get_all_secrets(vault: &SecretVault) -> CommandResult<BTreeMap<String, String>> {
    vault
        .get_all()
        .map_err(|e| map_vault_error("Failed to get all AdMob keys".to_string(), e))
}

/// 메서드 이름으로 요청 처리
pub fn dispatch(vault: &SecretVault, method: &str) -> MethodResponse {
    let Some(parsed) = Method::from_name(method) else {
        tracing::debug!(method, "unrecognized secure config method");
        return MethodResponse::NotImplemented {
            method: method.to_string(),
        };
    };

    tracing::debug!(method, "secure config request");
    let result = match parsed.secret() {
        Some(name) => get_secret(vault, name).map(MethodValue::Text),
        None => get_all_secrets(vault).map(MethodValue::Keys),
    };

    match result {
        Ok(value) => MethodResponse::Success { value },
        Err(err) => MethodResponse::Error(err),
    }
}
