//! Secure AdMob Config - 네이티브 시크릿 프로바이더
//!
//! 앱 서명 지문을 검증한 뒤에만 바이너리에 봉인된 AdMob 키를 복호화해
//! 웹뷰(신뢰도 낮은 호출자)에 전달합니다.
//!
//! 호스트 앱 연동 (`desktop` feature):
//!
//! ```ignore
//! let config = secure_keys_lib::config::VaultConfig::from_env()?;
//! app.manage(config.build_vault()?);
//! // generate_handler![commands::desktop::get_ad_mob_app_id, ...]
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod integrity;
pub mod secrets;
pub mod tooling;

pub use config::{ConfigError, VaultConfig};
pub use error::{CommandError, CommandResult, SECURITY_ERROR};
pub use integrity::{fingerprint, IntegrityVerifier, SigningIdentitySource};
pub use secrets::{SecretName, SecretVault, VaultError};
