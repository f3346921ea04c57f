//! 회원가입 요청 DTO
//!
//! 새 사용자 계정 생성을 위한 요청 데이터입니다.
//! 이메일은 소문자로, 이름은 trim 후 HTML 이스케이프된 상태로 정규화됩니다.
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::utils::string_utils::{normalize_email, sanitize_text};
use crate::validation::Schema;
use crate::validation::rules::{validate_email_format, validate_full_name, validate_password_strength};

/// 회원가입 요청
#[derive(Clone, Deserialize, Validate)]
pub struct UserRegister {
    /// 이메일 주소 (소문자, trim 적용)
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    /// 평문 비밀번호 (6-128자, 영문자+숫자 포함)
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 표시 이름 (2-100자, HTML 이스케이프 적용)
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,
}

impl UserRegister {
    /// 원시 입력으로부터 정규화 및 검증된 요청을 생성합니다.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> AppResult<Self> {
        Self {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
        .finalize()
    }
}

impl Schema for UserRegister {
    const NAME: &'static str = "UserRegister";

    fn normalize(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            full_name: sanitize_text(&self.full_name),
            ..self
        }
    }
}

// 비밀번호가 로그에 남지 않도록 직접 구현
impl fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegister")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .finish()
    }
}
