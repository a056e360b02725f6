//! Tauri 명령어 바인딩
//!
//! 호스트 앱은 `SecretVault`를 `app.manage()`로 등록하고
//! 아래 명령어들을 `generate_handler!`에 추가합니다.

use std::collections::BTreeMap;
use tauri::State;

use super::secure_config::{dispatch, get_all_secrets, get_secret, MethodResponse};
use crate::error::CommandResult;
use crate::secrets::{SecretName, SecretVault};

#[tauri::command]
pub fn get_ad_mob_app_id(vault: State<'_, SecretVault>) -> CommandResult<String> {
    get_secret(&vault, SecretName::AppId)
}

#[tauri::command]
pub fn get_banner_ad_unit_id(vault: State<'_, SecretVault>) -> CommandResult<String> {
    get_secret(&vault, SecretName::BannerAdUnitId)
}

#[tauri::command]
pub fn get_interstitial_ad_unit_id(vault: State<'_, SecretVault>) -> CommandResult<String> {
    get_secret(&vault, SecretName::InterstitialAdUnitId)
}

#[tauri::command]
pub fn get_rewarded_ad_unit_id(vault: State<'_, SecretVault>) -> CommandResult<String> {
    get_secret(&vault, SecretName::RewardedAdUnitId)
}

#[tauri::command]
pub fn get_all_keys(vault: State<'_, SecretVault>) -> CommandResult<BTreeMap<String, String>> {
    get_all_secrets(&vault)
}

/// 메서드 이름 기반 단일 진입점 (`getAdMobAppId` 등)
#[tauri::command]
pub fn secure_config_invoke(vault: State<'_, SecretVault>, method: String) -> MethodResponse {
    dispatch(&vault, &method)
}
