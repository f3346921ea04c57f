use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserData;
use crate::domain::models::{SubscriptionStatus, UserRole};

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 암호화된 자격 증명은 포함하지 않고,
/// 자격 증명은 등록 여부(`has_api_keys`)만 노출합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub subscription_status: SubscriptionStatus,
    pub trial_end_date: Option<DateTime<Utc>>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub is_testnet: bool,
    pub has_api_keys: bool,
}

impl From<&UserData> for UserResponse {
    fn from(user: &UserData) -> Self {
        Self {
            uid: user.uid.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            subscription_status: user.subscription_status,
            trial_end_date: user.trial_end_date,
            subscription_end_date: user.subscription_end_date,
            is_testnet: user.is_testnet,
            has_api_keys: user.has_api_credentials(),
        }
    }
}

impl From<UserData> for UserResponse {
    fn from(user: UserData) -> Self {
        let has_api_keys = user.has_api_credentials();
        let UserData {
            uid,
            email,
            full_name,
            role,
            subscription_status,
            trial_end_date,
            subscription_end_date,
            is_testnet,
            ..
        } = user;

        Self {
            uid,
            email,
            full_name,
            role,
            subscription_status,
            trial_end_date,
            subscription_end_date,
            is_testnet,
            has_api_keys,
        }
    }
}

/// 회원가입/로그인 응답 DTO
///
/// 토큰은 외부 인증 모듈이 발급한 값을 그대로 전달합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(access_token: impl Into<String>, user: &UserData) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            user: UserResponse::from(user),
        }
    }
}
