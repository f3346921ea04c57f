//! 결제 완료 알림 DTO
//!
//! 사용자가 USDT 송금 후 관리자에게 확인을 요청할 때 전송하는 데이터입니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppResult;
use crate::utils::string_utils::{normalize_email, sanitize_optional_text};
use crate::validation::Schema;
use crate::validation::rules::{validate_email_format, validate_message_length};

/// 결제 알림 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PaymentNotification {
    #[validate(custom(function = "validate_email_format"))]
    pub user_email: String,

    /// 관리자에게 남기는 메시지 (trim, HTML 이스케이프 후 500자 이하)
    #[serde(default)]
    #[validate(custom(function = "validate_message_length"))]
    pub message: Option<String>,
}

impl PaymentNotification {
    pub fn new(user_email: impl Into<String>, message: Option<&str>) -> AppResult<Self> {
        Self {
            user_email: user_email.into(),
            message: message.map(str::to_string),
        }
        .finalize()
    }
}

impl Schema for PaymentNotification {
    const NAME: &'static str = "PaymentNotification";

    fn normalize(self) -> Self {
        Self {
            user_email: normalize_email(&self.user_email),
            message: sanitize_optional_text(self.message),
        }
    }
}
