//! Secure Config Commands Module
//!
//! 웹뷰에서 호출 가능한 명령어 정의

#[cfg(feature = "desktop")]
pub mod desktop;
pub mod secure_config;

pub use secure_config::{dispatch, Method, MethodResponse, MethodValue};
