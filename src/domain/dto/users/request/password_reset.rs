//! 비밀번호 재설정 요청 DTO
//!
//! 1. `PasswordReset` - 재설정 메일 발송 요청 (이메일만)
//! 2. `PasswordResetConfirm` - 메일로 받은 토큰과 새 비밀번호로 재설정 확정
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::utils::string_utils::normalize_email;
use crate::validation::Schema;
use crate::validation::rules::{validate_email_format, validate_new_password, validate_reset_token};

/// 재설정 메일 발송 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordReset {
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,
}

impl PasswordReset {
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        Self { email: email.into() }.finalize()
    }
}

impl Schema for PasswordReset {
    const NAME: &'static str = "PasswordReset";

    fn normalize(self) -> Self {
        Self {
            email: normalize_email(&self.email),
        }
    }
}

/// 재설정 확정 요청
///
/// 토큰과 새 비밀번호는 정규화하지 않습니다.
#[derive(Clone, Deserialize, Validate)]
pub struct PasswordResetConfirm {
    /// 재설정 토큰 (영문자, 숫자, `-`, `_` / 10-200자)
    #[validate(custom(function = "validate_reset_token"))]
    pub token: String,

    /// 새 비밀번호 (회원가입과 같은 강도 규칙, 영문자/숫자 검사가 길이 상한보다 먼저)
    #[validate(custom(function = "validate_new_password"))]
    pub new_password: String,
}

impl PasswordResetConfirm {
    pub fn new(token: impl Into<String>, new_password: impl Into<String>) -> AppResult<Self> {
        Self {
            token: token.into(),
            new_password: new_password.into(),
        }
        .finalize()
    }
}

impl Schema for PasswordResetConfirm {
    const NAME: &'static str = "PasswordResetConfirm";
}

impl fmt::Debug for PasswordResetConfirm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetConfirm")
            .field("token", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_email_normalized() {
        let reset = PasswordReset::new("  Trader@Example.COM").unwrap();
        assert_eq!(reset.email, "trader@example.com");
    }

    #[test]
    fn test_reset_invalid_email() {
        let err = PasswordReset::new("trader").unwrap_err();
        assert!(err.has_violation("email", "invalid_email_format"));
        assert_eq!(err.violations()[0].value, Some(serde_json::json!("trader")));
    }

    #[test]
    fn test_confirm_valid() {
        let confirm = PasswordResetConfirm::new("abc-123-xyz9", "newpass1").unwrap();
        assert_eq!(confirm.token, "abc-123-xyz9");
    }

    #[test]
    fn test_confirm_reports_token_and_password() {
        let err = PasswordResetConfirm::new("bad token!", "short").unwrap_err();

        assert!(err.has_violation("token", "invalid_token_format"));
        assert!(err.has_violation("new_password", "weak_password"));
        // 민감 필드 값은 응답에 포함되지 않음
        assert!(err.violations().iter().all(|v| v.value.is_none()));
    }

    #[test]
    fn test_confirm_letters_only_long_password_is_weak() {
        let err = PasswordResetConfirm::new("abc-123-xyz9", "a".repeat(129)).unwrap_err();

        assert!(err.has_violation("new_password", "weak_password"));
        assert!(!err.has_violation("new_password", "password_too_long"));
    }

    #[test]
    fn test_confirm_short_token() {
        let err = PasswordResetConfirm::new("abc123", "newpass1").unwrap_err();
        assert!(err.has_violation("token", "invalid_token_length"));
    }

    #[test]
    fn test_confirm_debug_redacts_secrets() {
        let confirm = PasswordResetConfirm::new("abc-123-xyz9", "newpass1").unwrap();
        let debug = format!("{:?}", confirm);
        assert!(!debug.contains("abc-123-xyz9"));
        assert!(!debug.contains("newpass1"));
    }
}
