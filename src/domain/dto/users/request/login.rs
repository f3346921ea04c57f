//! 로그인 요청 DTO
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::utils::string_utils::normalize_email;
use crate::validation::Schema;
use crate::validation::rules::{validate_email_format, validate_login_password};

/// 이메일/비밀번호 로그인 요청
///
/// 비밀번호는 길이(1-128자)만 확인합니다. 강도 규칙은 가입 시점에만 적용됩니다.
#[derive(Clone, Deserialize, Validate)]
pub struct UserLogin {
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    #[validate(custom(function = "validate_login_password"))]
    pub password: String,
}

impl UserLogin {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> AppResult<Self> {
        Self {
            email: email.into(),
            password: password.into(),
        }
        .finalize()
    }
}

impl Schema for UserLogin {
    const NAME: &'static str = "UserLogin";

    fn normalize(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self
        }
    }
}

impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
