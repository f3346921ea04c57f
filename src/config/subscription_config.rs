//! 구독 관련 설정
//!
//! 체험 기간, 구독 기간, 구독 가격을 환경 변수에서 읽습니다.
//! 신규 가입 사용자의 `trial_end_date`와 결제 요청 금액을 계산할 때 사용됩니다.
//!
//! ```bash
//! export TRIAL_DAYS="7"
//! export SUBSCRIPTION_DAYS="30"
//! export SUBSCRIPTION_PRICE_USDT="10.0"
//! ```

use std::env;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

const DEFAULT_TRIAL_DAYS: i64 = 7;
const DEFAULT_SUBSCRIPTION_DAYS: i64 = 30;
const DEFAULT_SUBSCRIPTION_PRICE_USDT: f64 = 10.0;

/// 구독 설정
pub struct SubscriptionConfig;

impl SubscriptionConfig {
    /// 신규 가입자의 무료 체험 일수. 기본값: 7
    pub fn trial_days() -> i64 {
        Self::try_trial_days().unwrap_or_else(|e| {
            log::error!("{}. 기본값 {} 사용", e, DEFAULT_TRIAL_DAYS);
            DEFAULT_TRIAL_DAYS
        })
    }

    /// 결제 승인 시 연장되는 구독 일수. 기본값: 30
    pub fn subscription_days() -> i64 {
        Self::try_subscription_days().unwrap_or_else(|e| {
            log::error!("{}. 기본값 {} 사용", e, DEFAULT_SUBSCRIPTION_DAYS);
            DEFAULT_SUBSCRIPTION_DAYS
        })
    }

    /// 구독 1회 가격 (USDT). 기본값: 10.0
    pub fn price_usdt() -> f64 {
        Self::try_price_usdt().unwrap_or_else(|e| {
            log::error!("{}. 기본값 {} 사용", e, DEFAULT_SUBSCRIPTION_PRICE_USDT);
            DEFAULT_SUBSCRIPTION_PRICE_USDT
        })
    }

    pub fn try_trial_days() -> AppResult<i64> {
        read_var("TRIAL_DAYS", DEFAULT_TRIAL_DAYS).and_then(|days| non_negative("TRIAL_DAYS", days))
    }

    pub fn try_subscription_days() -> AppResult<i64> {
        read_var("SUBSCRIPTION_DAYS", DEFAULT_SUBSCRIPTION_DAYS)
            .and_then(|days| non_negative("SUBSCRIPTION_DAYS", days))
    }

    pub fn try_price_usdt() -> AppResult<f64> {
        let price = read_var("SUBSCRIPTION_PRICE_USDT", DEFAULT_SUBSCRIPTION_PRICE_USDT)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(AppError::ConfigError(format!(
                "SUBSCRIPTION_PRICE_USDT must be a positive number, got {}",
                price
            )));
        }
        Ok(price)
    }
}

fn read_var<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_setting(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_setting<T>(name: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| AppError::ConfigError(format!("{} 파싱 실패 ('{}'): {}", name, raw, e)))
}

fn non_negative(name: &str, days: i64) -> AppResult<i64> {
    if days < 0 {
        return Err(AppError::ConfigError(format!(
            "{} must not be negative, got {}",
            name, days
        )));
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting::<i64>("TRIAL_DAYS", " 14 ").unwrap(), 14);
        assert_eq!(parse_setting::<f64>("SUBSCRIPTION_PRICE_USDT", "12.5").unwrap(), 12.5);

        let err = parse_setting::<i64>("TRIAL_DAYS", "seven").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("TRIAL_DAYS")));
    }

    #[test]
    fn test_negative_days_rejected() {
        assert!(non_negative("TRIAL_DAYS", -1).is_err());
        assert_eq!(non_negative("TRIAL_DAYS", 0).unwrap(), 0);
    }

    #[test]
    fn test_defaults_when_unset() {
        if env::var("TRIAL_DAYS").is_err() {
            assert_eq!(SubscriptionConfig::trial_days(), 7);
        }
        if env::var("SUBSCRIPTION_DAYS").is_err() {
            assert_eq!(SubscriptionConfig::subscription_days(), 30);
        }
        if env::var("SUBSCRIPTION_PRICE_USDT").is_err() {
            assert_eq!(SubscriptionConfig::price_usdt(), 10.0);
        }
    }
}
