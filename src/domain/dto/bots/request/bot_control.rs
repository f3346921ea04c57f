//! 봇 시작/중지 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::BotAction;
use crate::errors::AppResult;
use crate::utils::string_utils::normalize_symbol;
use crate::validation::Schema;
use crate::validation::rules::{validate_bot_action, validate_trading_symbol};

/// 봇 제어 요청
///
/// `action`은 문자열로 받아 다른 필드 위반과 함께 집계되도록 하고,
/// 검증 후에는 [`BotControl::bot_action`]으로 타입이 있는 값을 얻습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BotControl {
    /// `start` 또는 `stop`
    #[validate(custom(function = "validate_bot_action"))]
    pub action: String,

    /// 거래 심볼 (예: `BTCUSDT`), 없으면 사용자의 기본 심볼 사용
    #[serde(default)]
    #[validate(custom(function = "validate_trading_symbol"))]
    pub symbol: Option<String>,
}

impl BotControl {
    pub fn new(action: impl Into<String>, symbol: Option<&str>) -> AppResult<Self> {
        Self {
            action: action.into(),
            symbol: symbol.map(str::to_string),
        }
        .finalize()
    }

    pub fn bot_action(&self) -> AppResult<BotAction> {
        self.action.parse()
    }
}

impl Schema for BotControl {
    const NAME: &'static str = "BotControl";

    fn normalize(self) -> Self {
        Self {
            symbol: self.symbol.as_deref().map(normalize_symbol),
            ..self
        }
    }
}
