//! 구독 결제 요청 엔티티
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::config::SubscriptionConfig;
use crate::domain::entities::{Record, UserData};
use crate::domain::models::PaymentStatus;
use crate::errors::{AppError, AppResult};
use crate::utils::datetime_utils::{deserialize_optional_timestamp, deserialize_timestamp};
use crate::validation::rules::validate_payment_amount;

/// 사용자의 결제 확인 요청
///
/// 관리자가 승인 또는 거절할 때까지 `PENDING` 상태로 남습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub request_id: String,
    pub user_uid: String,
    pub user_email: String,
    pub amount_usdt: f64,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub processed_at: Option<DateTime<Utc>>,
    /// 관리자 메모
    #[serde(default)]
    pub admin_notes: Option<String>,
}

impl Record for PaymentRequest {
    const COLLECTION: &'static str = "payment_requests";
}

impl PaymentRequest {
    /// 새 결제 요청 생성 (request_id는 UUID v4)
    ///
    /// 금액이 0 이하이거나 유한하지 않으면 `amount_usdt` 필드 위반으로 거부됩니다.
    pub fn new(user: &UserData, amount_usdt: f64, created_at: DateTime<Utc>) -> AppResult<Self> {
        if let Err(error) = validate_payment_amount(amount_usdt) {
            log::warn!("결제 요청 금액 거부: user_uid={}, amount={}", user.uid, amount_usdt);
            let mut errors = ValidationErrors::new();
            errors.add("amount_usdt", error);
            return Err(AppError::InvalidFields(errors));
        }

        Ok(Self {
            request_id: Uuid::new_v4().to_string(),
            user_uid: user.uid.clone(),
            user_email: user.email.clone(),
            amount_usdt,
            status: PaymentStatus::Pending,
            created_at,
            processed_at: None,
            admin_notes: None,
        })
    }

    /// 현재 구독 가격(`SUBSCRIPTION_PRICE_USDT`)으로 결제 요청 생성
    pub fn for_subscription(user: &UserData, created_at: DateTime<Utc>) -> AppResult<Self> {
        Self::new(user, SubscriptionConfig::price_usdt(), created_at)
    }

    pub fn is_pending(&self) -> bool {
        !self.status.is_processed()
    }
}
