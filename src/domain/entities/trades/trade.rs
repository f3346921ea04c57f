//! 거래 기록 엔티티
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Record;
use crate::domain::models::{TradeSide, TradeStatus};
use crate::utils::datetime_utils::deserialize_timestamp;

/// 봇이 실행한 거래 한 건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeData {
    pub trade_id: String,
    pub user_uid: String,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: f64,
    /// 체결 가격 (USDT)
    pub price: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// 실현 손익, 포지션이 열려 있으면 없음
    #[serde(default)]
    pub profit_loss: Option<f64>,
    #[serde(default)]
    pub status: TradeStatus,
}

impl Record for TradeData {
    const COLLECTION: &'static str = "trades";
}

impl TradeData {
    pub fn is_open(&self) -> bool {
        matches!(self.status, TradeStatus::Open)
    }

    /// 명목 거래 금액 (수량 × 가격)
    pub fn notional_usdt(&self) -> f64 {
        self.quantity * self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_trade_defaults() {
        let trade = TradeData::from_record(json!({
            "trade_id": "t-1",
            "user_uid": "uid-1",
            "symbol": "BTCUSDT",
            "side": "BUY",
            "quantity": 0.5,
            "price": 60000.0,
            "timestamp": "2024-05-01T12:00:00"
        }))
        .unwrap();

        assert_eq!(trade.side, TradeSide::Buy);
        assert_eq!(trade.status, TradeStatus::Open);
        assert_eq!(trade.profit_loss, None);
        assert_eq!(trade.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        assert!(trade.is_open());
        assert_eq!(trade.notional_usdt(), 30000.0);
    }

    #[test]
    fn test_closed_trade() {
        let trade = TradeData::from_record(json!({
            "trade_id": "t-2",
            "user_uid": "uid-1",
            "symbol": "ETHUSDT",
            "side": "SELL",
            "quantity": 2.0,
            "price": 3000.0,
            "timestamp": "2024-05-01T12:00:00+00:00",
            "profit_loss": -12.5,
            "status": "CLOSED"
        }))
        .unwrap();

        assert!(!trade.is_open());
        assert_eq!(trade.profit_loss, Some(-12.5));
        assert_eq!(trade.to_record().unwrap()["status"], "CLOSED");
    }

    #[test]
    fn test_unknown_side_or_status_rejected() {
        let base = json!({
            "trade_id": "t-3",
            "user_uid": "uid-1",
            "symbol": "BTCUSDT",
            "side": "HOLD",
            "quantity": 1.0,
            "price": 1.0,
            "timestamp": "2024-05-01T12:00:00Z"
        });
        assert!(matches!(
            TradeData::from_record(base.clone()).unwrap_err(),
            AppError::RecordDecodeError(_)
        ));

        let mut partial = base;
        partial["side"] = json!("BUY");
        partial["status"] = json!("PARTIAL");
        assert!(TradeData::from_record(partial).is_err());
    }

    #[test]
    fn test_missing_timestamp_rejected() {
        let err = TradeData::from_record(json!({
            "trade_id": "t-4",
            "user_uid": "uid-1",
            "symbol": "BTCUSDT",
            "side": "BUY",
            "quantity": 1.0,
            "price": 1.0
        }))
        .unwrap_err();

        assert!(err.to_string().contains("timestamp"));
    }
}
