//! 봇 거래 설정 DTO
//!
//! 모든 필드는 선택 사항이며, 누락된 필드는 기본값으로 채워진 뒤 검증됩니다.
//! 실수 필드는 범위와 함께 유한한 값인지도 검사합니다.
//!
//! | 필드 | 기본값 | 허용 범위 |
//! |------|--------|-----------|
//! | `order_size_usdt` | 25.0 | 10 - 1000 |
//! | `leverage` | 10 | 1 - 20 (정수, `10.0`처럼 소수부가 0인 값 허용) |
//! | `stop_loss_percent` | 4.0 | 1 - 10 |
//! | `take_profit_percent` | 8.0 | 2 - 20 |
//! | `timeframe` | `"15m"` | `1m`, `5m`, `15m`, `1h`, `4h` |
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::models::Timeframe;
use crate::errors::AppResult;
use crate::validation::Schema;
use crate::validation::rules::{validate_finite_number, validate_timeframe};

pub const DEFAULT_ORDER_SIZE_USDT: f64 = 25.0;
pub const DEFAULT_LEVERAGE: i64 = 10;
pub const DEFAULT_STOP_LOSS_PERCENT: f64 = 4.0;
pub const DEFAULT_TAKE_PROFIT_PERCENT: f64 = 8.0;

fn default_order_size_usdt() -> f64 {
    DEFAULT_ORDER_SIZE_USDT
}

fn default_leverage() -> i64 {
    DEFAULT_LEVERAGE
}

fn default_stop_loss_percent() -> f64 {
    DEFAULT_STOP_LOSS_PERCENT
}

fn default_take_profit_percent() -> f64 {
    DEFAULT_TAKE_PROFIT_PERCENT
}

fn default_timeframe() -> String {
    Timeframe::default().as_str().to_string()
}

/// 정수 또는 소수부가 0인 실수(`10.0`)를 레버리지로 받음
fn deserialize_leverage<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(leverage) = number.as_i64() {
        return Ok(leverage);
    }

    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 => Ok(value as i64),
        _ => Err(D::Error::custom(format!(
            "leverage must be a whole number, got {}",
            number
        ))),
    }
}

/// 봇 거래 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BotSettings {
    /// 주문당 금액 (USDT)
    #[serde(default = "default_order_size_usdt")]
    #[validate(
        range(
            min = 10.0,
            max = 1000.0,
            code = "out_of_range",
            message = "Order size must be between 10-1000 USDT"
        ),
        custom(function = "validate_finite_number")
    )]
    pub order_size_usdt: f64,

    /// 레버리지 배수
    #[serde(default = "default_leverage", deserialize_with = "deserialize_leverage")]
    #[validate(range(min = 1, max = 20, code = "out_of_range", message = "Leverage must be between 1-20"))]
    pub leverage: i64,

    /// 손절 비율 (%)
    #[serde(default = "default_stop_loss_percent")]
    #[validate(
        range(
            min = 1.0,
            max = 10.0,
            code = "out_of_range",
            message = "Stop loss must be between 1-10%"
        ),
        custom(function = "validate_finite_number")
    )]
    pub stop_loss_percent: f64,

    /// 익절 비율 (%)
    #[serde(default = "default_take_profit_percent")]
    #[validate(
        range(
            min = 2.0,
            max = 20.0,
            code = "out_of_range",
            message = "Take profit must be between 2-20%"
        ),
        custom(function = "validate_finite_number")
    )]
    pub take_profit_percent: f64,

    /// 캔들 타임프레임
    #[serde(default = "default_timeframe")]
    #[validate(custom(function = "validate_timeframe"))]
    pub timeframe: String,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            order_size_usdt: DEFAULT_ORDER_SIZE_USDT,
            leverage: DEFAULT_LEVERAGE,
            stop_loss_percent: DEFAULT_STOP_LOSS_PERCENT,
            take_profit_percent: DEFAULT_TAKE_PROFIT_PERCENT,
            timeframe: default_timeframe(),
        }
    }
}

impl BotSettings {
    pub fn new(
        order_size_usdt: f64,
        leverage: i64,
        stop_loss_percent: f64,
        take_profit_percent: f64,
        timeframe: impl Into<String>,
    ) -> AppResult<Self> {
        Self {
            order_size_usdt,
            leverage,
            stop_loss_percent,
            take_profit_percent,
            timeframe: timeframe.into(),
        }
        .finalize()
    }

    pub fn timeframe(&self) -> AppResult<Timeframe> {
        self.timeframe.parse()
    }
}

impl Schema for BotSettings {
    const NAME: &'static str = "BotSettings";
}
