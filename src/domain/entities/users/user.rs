//! User Entity Implementation
//!
//! 플랫폼 사용자 레코드입니다. 계정 정보, 구독 상태, 암호화된 거래소 자격 증명을 담습니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SubscriptionConfig;
use crate::domain::dto::users::request::UserRegister;
use crate::domain::entities::Record;
use crate::domain::models::{SubscriptionStatus, UserRole};
use crate::utils::datetime_utils::deserialize_optional_timestamp;

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// 인증 제공자가 발급한 사용자 ID
    pub uid: String,
    pub email: String,
    pub full_name: String,
    /// 해시된 비밀번호 (응답에는 절대 포함하지 않음)
    pub password_hash: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub trial_end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub subscription_end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// 관리자에 의한 차단 여부
    #[serde(default)]
    pub is_blocked: bool,
    /// 암호화된 거래소 API 키
    #[serde(default)]
    pub api_key_encrypted: Option<String>,
    /// 암호화된 거래소 API 시크릿
    #[serde(default)]
    pub api_secret_encrypted: Option<String>,
    #[serde(default)]
    pub is_testnet: bool,
}

impl Record for UserData {
    const COLLECTION: &'static str = "users";
}

impl UserData {
    /// 회원가입 직후의 사용자 생성
    ///
    /// 일반 사용자 역할, 체험판 상태로 시작하며
    /// 체험 종료일은 `created_at + trial_days`입니다.
    pub fn new_trial(
        uid: impl Into<String>,
        register: &UserRegister,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
        trial_days: i64,
    ) -> Self {
        Self {
            uid: uid.into(),
            email: register.email.clone(),
            full_name: register.full_name.clone(),
            password_hash: password_hash.into(),
            role: UserRole::User,
            subscription_status: SubscriptionStatus::Trial,
            trial_end_date: Some(created_at + Duration::days(trial_days)),
            subscription_end_date: None,
            created_at: Some(created_at),
            is_blocked: false,
            api_key_encrypted: None,
            api_secret_encrypted: None,
            is_testnet: false,
        }
    }

    /// 설정된 체험 기간(`TRIAL_DAYS`)으로 신규 사용자 생성
    pub fn from_registration(
        uid: impl Into<String>,
        register: &UserRegister,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new_trial(uid, register, password_hash, created_at, SubscriptionConfig::trial_days())
    }

    /// 암호화된 거래소 자격 증명이 연결된 사본을 반환합니다.
    pub fn with_api_credentials(
        self,
        api_key_encrypted: impl Into<String>,
        api_secret_encrypted: impl Into<String>,
        is_testnet: bool,
    ) -> Self {
        Self {
            api_key_encrypted: Some(api_key_encrypted.into()),
            api_secret_encrypted: Some(api_secret_encrypted.into()),
            is_testnet,
            ..self
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// 키와 시크릿이 모두 등록되어 있는지 여부
    pub fn has_api_credentials(&self) -> bool {
        self.api_key_encrypted.is_some() && self.api_secret_encrypted.is_some()
    }

    /// 주어진 시점에 서비스(봇 실행)를 사용할 수 있는지 확인
    ///
    /// - 차단된 사용자: 항상 불가
    /// - 관리자: 항상 가능
    /// - 구독 중: 종료일이 없거나 아직 지나지 않았으면 가능
    /// - 체험판: 체험 종료일이 아직 지나지 않았으면 가능
    pub fn has_active_access(&self, now: DateTime<Utc>) -> bool {
        if self.is_blocked {
            return false;
        }
        if self.is_admin() {
            return true;
        }

        match self.subscription_status {
            SubscriptionStatus::Active => self.subscription_end_date.is_none_or(|end| end > now),
            SubscriptionStatus::Trial => self.trial_end_date.is_some_and(|end| end > now),
            SubscriptionStatus::Expired | SubscriptionStatus::Cancelled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::TimeZone;
    use serde_json::json;

    fn registered_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn sample_user() -> UserData {
        let register = UserRegister::new("trader@example.com", "abc123", "Ada Lovelace").unwrap();
        UserData::new_trial("uid-1", &register, "$2b$12$hash", registered_at(), 7)
    }

    #[test]
    fn test_minimal_record_uses_defaults() {
        let user = UserData::from_record(json!({
            "uid": "uid-1",
            "email": "trader@example.com",
            "full_name": "Ada Lovelace",
            "password_hash": "$2b$12$hash"
        }))
        .unwrap();

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.subscription_status, SubscriptionStatus::Trial);
        assert_eq!(user.trial_end_date, None);
        assert_eq!(user.subscription_end_date, None);
        assert_eq!(user.created_at, None);
        assert!(!user.is_blocked);
        assert_eq!(user.api_key_encrypted, None);
        assert_eq!(user.api_secret_encrypted, None);
        assert!(!user.is_testnet);
    }

    #[test]
    fn test_naive_timestamps_decode_as_utc() {
        let user = UserData::from_record(json!({
            "uid": "uid-1",
            "email": "trader@example.com",
            "full_name": "Ada Lovelace",
            "password_hash": "hash",
            "trial_end_date": "2024-05-08T12:00:00.000123",
            "created_at": "2024-05-01T12:00:00",
            "subscription_end_date": null
        }))
        .unwrap();

        assert_eq!(user.created_at, Some(registered_at()));
        assert_eq!(
            user.trial_end_date.unwrap().timestamp(),
            Utc.with_ymd_and_hms(2024, 5, 8, 12, 0, 0).unwrap().timestamp()
        );
        assert_eq!(user.subscription_end_date, None);
    }

    #[test]
    fn test_unknown_role_is_decode_error() {
        let err = UserData::from_record(json!({
            "uid": "uid-1",
            "email": "trader@example.com",
            "full_name": "Ada",
            "password_hash": "hash",
            "role": "superuser"
        }))
        .unwrap_err();

        assert!(matches!(err, AppError::RecordDecodeError(_)));
    }

    #[test]
    fn test_new_trial() {
        let user = sample_user();

        assert_eq!(user.uid, "uid-1");
        assert_eq!(user.subscription_status, SubscriptionStatus::Trial);
        assert_eq!(user.trial_end_date, Some(registered_at() + Duration::days(7)));
        assert!(!user.has_api_credentials());
    }

    #[test]
    fn test_registration_uses_configured_trial() {
        let register = UserRegister::new("trader@example.com", "abc123", "Ada Lovelace").unwrap();
        let user = UserData::from_registration("uid-2", &register, "hash", registered_at());

        assert_eq!(user.subscription_status, SubscriptionStatus::Trial);
        assert!(user.trial_end_date.unwrap() >= registered_at());
        if std::env::var("TRIAL_DAYS").is_err() {
            assert_eq!(user.trial_end_date, Some(registered_at() + Duration::days(7)));
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let user = sample_user().with_api_credentials("enc-key", "enc-secret", true);
        let record = user.to_record().unwrap();

        assert_eq!(record["role"], "user");
        assert_eq!(record["subscription_status"], "trial");
        assert_eq!(UserData::from_record(record).unwrap(), user);
    }

    #[test]
    fn test_with_api_credentials() {
        let user = sample_user().with_api_credentials("enc-key", "enc-secret", true);

        assert!(user.has_api_credentials());
        assert!(user.is_testnet);
        assert_eq!(user.api_key_encrypted.as_deref(), Some("enc-key"));
    }

    #[test]
    fn test_trial_access_expires() {
        let user = sample_user();

        assert!(user.has_active_access(registered_at() + Duration::days(6)));
        assert!(!user.has_active_access(registered_at() + Duration::days(8)));
    }

    #[test]
    fn test_active_subscription_access() {
        let mut user = sample_user();
        user.subscription_status = SubscriptionStatus::Active;
        assert!(user.has_active_access(registered_at() + Duration::days(365)));

        user.subscription_end_date = Some(registered_at() + Duration::days(30));
        assert!(user.has_active_access(registered_at() + Duration::days(29)));
        assert!(!user.has_active_access(registered_at() + Duration::days(31)));
    }

    #[test]
    fn test_blocked_and_admin_access() {
        let mut user = sample_user();
        user.role = UserRole::Admin;
        user.subscription_status = SubscriptionStatus::Expired;
        assert!(user.is_admin());
        assert!(user.has_active_access(registered_at() + Duration::days(100)));

        user.is_blocked = true;
        assert!(!user.has_active_access(registered_at()));
    }
}
