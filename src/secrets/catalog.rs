//! 내장 시크릿 목록
//!
//! 빌드 시 `secure-keys seal <NAME>`으로 생성한 봉인 값을 그대로 보관합니다.
//! 평문 값은 소스에 두지 않습니다.

use std::str::FromStr;

use super::sealed;
use super::vault::VaultError;

/// 모든 시크릿이 공유하는 내장 키
///
/// 봉인 값은 AEAD 형식이며, 이전의 base64 인코딩만 된 상수(`"Y2EtYXBwLXB1Yi0y…"`)와 호환되지 않습니다.
pub(crate) const EMBEDDED_KEY: &str = "K8x#mP2$vL9nQ4@jR7wE5&hF3sA6";

const SEALED_APP_ID: &str =
    "leB4gM2XZV5vEOkfJDz1LOjMn6cbIQ6yAxfYoUUcKik3e8yc7ClJ4T5sl7cjdP7AkcLyqUkWqQVXC4B12p5HAnqr";

const SEALED_BANNER_AD_UNIT_ID: &str =
    "Iiz8m7b5W9hMH3I8x09Ns92E80CyA3BhNL/bfRpiVTe2Rqy2kTdWk7jBCr80NID5z4GV2K/t6jxbx7PUZpMDOhvJ";

const SEALED_INTERSTITIAL_AD_UNIT_ID: &str =
    "O2jjyK0TE7LImOTdwtWNjs6v8r/yYcxWFQ4a9pehqVfoolvWNTIuVcm/gNzTYqiWs01bRKQ9r+drYamo5Qpnrvo4";

const SEALED_REWARDED_AD_UNIT_ID: &str =
    "+Vo6XkqFqVbLV3qL8kczU5PiJ5TfpbLk4yszK8dCz4U+q0f98r7KcJhiy92+PsrGFcUnxE9F460vdGQytuuJxRT9";

/// 시크릿 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecretName {
    AppId,
    BannerAdUnitId,
    InterstitialAdUnitId,
    RewardedAdUnitId,
}

impl SecretName {
    /// `getAllKeys` 조회 순서
    pub const ALL: [SecretName; 4] = [
        SecretName::AppId,
        SecretName::BannerAdUnitId,
        SecretName::InterstitialAdUnitId,
        SecretName::RewardedAdUnitId,
    ];

    /// 키 이름 (AAD 및 `getAllKeys` 맵 키로 사용)
    pub fn as_str(self) -> &'static str {
        match self {
            SecretName::AppId => "app_id",
            SecretName::BannerAdUnitId => "banner_ad_unit_id",
            SecretName::InterstitialAdUnitId => "interstitial_ad_unit_id",
            SecretName::RewardedAdUnitId => "rewarded_ad_unit_id",
        }
    }

    /// 실패 메시지에 쓰이는 사람이 읽을 수 있는 이름
    pub fn label(self) -> &'static str {
        match self {
            SecretName::AppId => "AdMob App ID",
            SecretName::BannerAdUnitId => "Banner Ad Unit ID",
            SecretName::InterstitialAdUnitId => "Interstitial Ad Unit ID",
            SecretName::RewardedAdUnitId => "Rewarded Ad Unit ID",
        }
    }
}

impl std::fmt::Display for SecretName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecretName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// 봉인된 시크릿 테이블과 복호화 키
///
/// 읽기 전용이며 프로세스 수명 동안 유지됩니다.
#[derive(Clone)]
pub struct SecretCatalog {
    key: String,
    entries: [(SecretName, String); 4],
}

impl SecretCatalog {
    /// 바이너리에 내장된 기본 테이블
    pub fn embedded() -> Self {
        Self {
            key: EMBEDDED_KEY.to_string(),
            entries: [
                (SecretName::AppId, SEALED_APP_ID.to_string()),
                (SecretName::BannerAdUnitId, SEALED_BANNER_AD_UNIT_ID.to_string()),
                (
                    SecretName::InterstitialAdUnitId,
                    SEALED_INTERSTITIAL_AD_UNIT_ID.to_string(),
                ),
                (
                    SecretName::RewardedAdUnitId,
                    SEALED_REWARDED_AD_UNIT_ID.to_string(),
                ),
            ],
        }
    }

    /// 다른 키와 봉인 값으로 구성 (`ALL` 순서대로)
    pub fn new(key: impl Into<String>, sealed: [String; 4]) -> Self {
        let [app_id, banner, interstitial, rewarded] = sealed;
        Self {
            key: key.into(),
            entries: [
                (SecretName::AppId, app_id),
                (SecretName::BannerAdUnitId, banner),
                (SecretName::InterstitialAdUnitId, interstitial),
                (SecretName::RewardedAdUnitId, rewarded),
            ],
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// 이 테이블의 키로 새 값을 봉인 (빌드 도구용)
    pub fn seal(&self, name: SecretName, plaintext: &str) -> Result<String, VaultError> {
        sealed::seal(&self.key, name.as_str(), plaintext)
    }

    /// 이름에 해당하는 봉인 값
    pub fn sealed(&self, name: SecretName) -> &str {
        let (entry, sealed) = &self.entries[name as usize];
        debug_assert_eq!(*entry, name);
        sealed
    }
}

impl Default for SecretCatalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for SecretCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretCatalog")
            .field("names", &SecretName::ALL)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::sealed::open;

    #[test]
    fn test_names_parse_back() {
        for name in SecretName::ALL {
            assert_eq!(name.as_str().parse::<SecretName>().unwrap(), name);
        }
        assert!("admob_app_id".parse::<SecretName>().is_err());
    }

    #[test]
    fn test_embedded_values_decrypt_to_configured_ids() {
        let catalog = SecretCatalog::embedded();
        let expected = [
            (SecretName::AppId, "ca-app-pub-2438390987655762~7343872589"),
            (SecretName::BannerAdUnitId, "ca-app-pub-2438390987655762/1234567890"),
            (
                SecretName::InterstitialAdUnitId,
                "ca-app-pub-2438390987655762/0987654321",
            ),
            (
                SecretName::RewardedAdUnitId,
                "ca-app-pub-2438390987655762/8434411215",
            ),
        ];

        for (name, plaintext) in expected {
            let opened = open(catalog.key(), name.as_str(), catalog.sealed(name)).unwrap();
            assert_eq!(opened, plaintext, "{}", name);
        }
    }

    #[test]
    fn test_sealed_values_do_not_contain_plaintext() {
        let catalog = SecretCatalog::embedded();
        for name in SecretName::ALL {
            assert!(!catalog.sealed(name).contains("ca-app-pub"));
            // base64만 적용된 평문 접두사 ("ca-app-pub-" → "Y2EtYXBwLXB1Yi")
            assert!(!catalog.sealed(name).contains("Y2EtYXBwLXB1Yi"));
        }
    }

    #[test]
    fn test_catalog_seal_matches_its_key() {
        let catalog = SecretCatalog::embedded();
        let value = catalog.seal(SecretName::BannerAdUnitId, "new-banner").unwrap();
        assert_eq!(
            open(catalog.key(), "banner_ad_unit_id", &value).unwrap(),
            "new-banner"
        );
    }

    #[test]
    fn test_encode_only_constant_is_rejected() {
        // "ca-app-pub-2438390987655762~7343872589"의 base64 인코딩
        let encoded = "Y2EtYXBwLXB1Yi0yNDM4MzkwOTg3NjU1NzYyfjczNDM4NzI1ODk=";
        assert!(open(EMBEDDED_KEY, "app_id", encoded).is_err());
    }

    #[test]
    fn test_debug_omits_key_and_values() {
        let debug = format!("{:?}", SecretCatalog::embedded());
        assert!(!debug.contains(EMBEDDED_KEY));
        assert!(!debug.contains(SEALED_APP_ID));
    }
}
