//! # 봇 관련 요청 DTO 모듈
//!
//! - [`ApiKeysUpdate`] - 거래소 API 자격 증명 등록
//! - [`BotControl`] - 봇 시작/중지
//! - [`BotSettings`] - 주문 크기, 레버리지, 손절/익절, 타임프레임

pub mod api_keys;
pub mod bot_control;
pub mod bot_settings;

pub use api_keys::ApiKeysUpdate;
pub use bot_control::BotControl;
pub use bot_settings::BotSettings;
