//! 스키마 계층 전역에서 사용하는 에러 시스템
//!
//! 요청 검증, 저장 레코드 복원, 설정 로딩에서 발생하는 모든 실패를
//! 하나의 `AppError`로 모읍니다. `thiserror`로 `Error` trait을 구현하고
//! `actix_web::ResponseError`를 구현하여 경계 계층(HTTP 핸들러)에서
//! 그대로 반환하면 JSON 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | JSON 구조/타입 불일치, 필수 필드 누락 |
//! | `InvalidFields` | 422 Unprocessable Entity | 필드 규칙 위반 (모든 필드 집계) |
//! | `InvalidEnumValue` | 422 Unprocessable Entity | 닫힌 값 집합 밖의 값 |
//! | `RecordDecodeError` | 500 Internal Server Error | 저장 레코드 형식 손상 |
//! | `ConfigError` | 500 Internal Server Error | 환경 변수 파싱 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 검증 실패 응답 형식
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "Request contains invalid fields",
//!   "details": {
//!     "field_errors": {
//!       "email": ["Invalid email format"],
//!       "password": ["Password must contain at least one letter and one number"]
//!     },
//!     "violations": [
//!       { "field": "email", "rule": "invalid_email_format", "message": "Invalid email format", "value": "nope" },
//!       { "field": "password", "rule": "weak_password", "message": "...", "value_type": "string" }
//!     ]
//!   }
//! }
//! ```
//!
//! 비밀번호, 재설정 토큰, API 자격 증명은 `value` 대신 `value_type`만 포함합니다.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::config::Environment;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 스키마 형태로 디코딩하지 못함 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 하나 이상의 필드 규칙 위반 (422 Unprocessable Entity)
    ///
    /// `validator`가 모든 필드를 독립적으로 검사한 결과를 그대로 보관합니다.
    #[error("Invalid fields: {}", field_names(.0).join(", "))]
    InvalidFields(#[from] ValidationErrors),

    /// 닫힌 값 집합에 속하지 않는 값 (422 Unprocessable Entity)
    #[error("Invalid value '{value}' for {field}: expected one of {}", .allowed.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// 저장 레코드 복원 실패 (500 Internal Server Error)
    #[error("Record decode error: {0}")]
    RecordDecodeError(String),

    /// 설정값 파싱 실패 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 필드 하나에 대한 규칙 위반 정보
///
/// 경계 계층이 클라이언트에게 필드별 메시지를 렌더링할 때 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// 필드 이름
    pub field: String,
    /// 위반한 규칙 코드 (예: `invalid_email_format`)
    pub rule: String,
    /// 사람이 읽을 수 있는 메시지
    pub message: String,
    /// 문제가 된 값 (민감 필드는 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// 민감 필드의 경우 값 대신 타입만 기록
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

impl FieldViolation {
    fn from_validation_error(field: &str, error: &ValidationError) -> Self {
        let value_type = error
            .params
            .get("value_type")
            .and_then(|kind| kind.as_str())
            .map(str::to_string);

        // `value_type`이 있으면 민감 필드: 값은 어떤 경우에도 내보내지 않음
        let value = match value_type {
            Some(_) => None,
            None => error.params.get("value").cloned(),
        };

        Self {
            field: field.to_string(),
            rule: error.code.to_string(),
            message: error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string()),
            value,
            value_type,
        }
    }
}

fn field_names(errors: &ValidationErrors) -> Vec<String> {
    let mut names: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    names.sort();
    names
}

impl AppError {
    /// 규칙 위반 목록을 필드 이름 순으로 펼쳐서 반환합니다.
    ///
    /// 같은 필드 안에서는 검증 규칙이 선언된 순서를 유지합니다.
    /// 검증과 무관한 에러는 빈 목록을 반환합니다.
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self {
            AppError::InvalidFields(errors) => {
                let mut violations: Vec<FieldViolation> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, field_errors)| {
                        let field = field.to_string();
                        field_errors
                            .iter()
                            .map(move |error| FieldViolation::from_validation_error(&field, error))
                    })
                    .collect();
                violations.sort_by(|a, b| a.field.cmp(&b.field));
                violations
            }
            AppError::InvalidEnumValue { field, value, .. } => vec![FieldViolation {
                field: field.to_string(),
                rule: "invalid_enum_value".to_string(),
                message: self.to_string(),
                value: Some(Value::String(value.clone())),
                value_type: None,
            }],
            _ => Vec::new(),
        }
    }

    /// 특정 필드가 특정 규칙으로 실패했는지 확인
    pub fn has_violation(&self, field: &str, rule: &str) -> bool {
        self.violations()
            .iter()
            .any(|violation| violation.field == field && violation.rule == rule)
    }

    /// 필드 이름 → 메시지 목록 매핑 (422 응답의 `field_errors`)
    pub fn field_messages(&self) -> BTreeMap<String, Vec<String>> {
        let mut messages: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in self.violations() {
            messages
                .entry(violation.field)
                .or_default()
                .push(violation.message);
        }
        messages
    }

    /// 주어진 실행 환경 기준으로 응답 본문을 생성합니다.
    ///
    /// 프로덕션에서는 5xx 에러의 내부 상세 정보를 숨깁니다.
    pub fn response_body(&self, environment: &Environment) -> Value {
        match self {
            AppError::InvalidFields(_) | AppError::InvalidEnumValue { .. } => json!({
                "error": "validation_error",
                "message": "Request contains invalid fields",
                "details": {
                    "field_errors": self.field_messages(),
                    "violations": self.violations(),
                }
            }),
            AppError::ValidationError(message) => json!({
                "error": "bad_request",
                "message": message,
            }),
            _ => {
                let message = if environment.exposes_internal_errors() {
                    self.to_string()
                } else {
                    "Internal server error".to_string()
                };
                json!({
                    "error": "internal_error",
                    "message": message,
                })
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFields(_) | AppError::InvalidEnumValue { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        HttpResponse::build(status).json(self.response_body(&Environment::current()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn sample_errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let mut email = ValidationError::new("invalid_email_format")
            .with_message(Cow::Borrowed("Invalid email format"));
        email.add_param(Cow::Borrowed("value"), &"not-an-email");
        errors.add("email", email);

        let mut password = ValidationError::new("weak_password")
            .with_message(Cow::Borrowed("Password must be at least 6 characters"));
        password.add_param(Cow::Borrowed("value_type"), &"string");
        errors.add("password", password);

        errors
    }

    #[test]
    fn test_invalid_fields_response_status() {
        let error = AppError::from(sample_errors());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_malformed_payload_response_status() {
        let error = AppError::ValidationError("missing field `email`".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_record_decode_error_response_status() {
        let error = AppError::RecordDecodeError("users: missing field `uid`".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_violations_are_sorted_by_field() {
        let error = AppError::from(sample_errors());
        let violations = error.violations();

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[0].rule, "invalid_email_format");
        assert_eq!(violations[0].value, Some(json!("not-an-email")));
        assert_eq!(violations[1].field, "password");
        assert_eq!(violations[1].value, None);
        assert_eq!(violations[1].value_type.as_deref(), Some("string"));
    }

    #[test]
    fn test_validation_body_lists_every_field() {
        let error = AppError::from(sample_errors());
        let body = error.response_body(&Environment::Production);

        assert_eq!(body["error"], "validation_error");
        assert_eq!(
            body["details"]["field_errors"]["email"][0],
            "Invalid email format"
        );
        assert_eq!(
            body["details"]["field_errors"]["password"][0],
            "Password must be at least 6 characters"
        );
        // 민감 필드는 값을 노출하지 않음
        assert!(body["details"]["violations"][1].get("value").is_none());
    }

    #[test]
    fn test_sensitive_value_dropped_even_when_present() {
        let mut errors = ValidationErrors::new();
        let mut secret = ValidationError::new("invalid_api_credential_format")
            .with_message(Cow::Borrowed("API credentials contain invalid characters"));
        secret.add_param(Cow::Borrowed("value_type"), &"string");
        secret.add_param(Cow::Borrowed("value"), &"sk_live_plaintext");
        errors.add("api_secret", secret);

        let error = AppError::from(errors);
        let violation = &error.violations()[0];
        assert_eq!(violation.value, None);
        assert_eq!(violation.value_type.as_deref(), Some("string"));

        let body = error.response_body(&Environment::Production);
        assert!(!body.to_string().contains("sk_live_plaintext"));
    }

    #[test]
    fn test_enum_value_violation() {
        let error = AppError::InvalidEnumValue {
            field: "timeframe",
            value: "30m".to_string(),
            allowed: &["1m", "5m"],
        };

        assert!(error.has_violation("timeframe", "invalid_enum_value"));
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(error.to_string().contains("1m, 5m"));
    }

    #[test]
    fn test_internal_details_hidden_in_production() {
        let error = AppError::ConfigError("TRIAL_DAYS: invalid digit".to_string());

        let production = error.response_body(&Environment::Production);
        assert_eq!(production["message"], "Internal server error");

        let development = error.response_body(&Environment::Development);
        assert!(development["message"].as_str().unwrap().contains("TRIAL_DAYS"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
