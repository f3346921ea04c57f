//! # Validation Module
//!
//! 요청 스키마의 공통 동작(디코딩 → 정규화 → 검증)을 정의하는 모듈입니다.
//!
//! ## 처리 순서
//!
//! ```text
//! JSON 본문
//!   │  serde 디코딩       실패 → AppError::ValidationError (400)
//!   ▼
//! Schema::normalize      trim, 소문자/대문자 변환, HTML 이스케이프
//!   ▼
//! Validate::validate     모든 필드를 독립적으로 검사
//!   │                    실패 → AppError::InvalidFields (422, 전체 위반 목록)
//!   ▼
//! 정규화된 스키마 값
//! ```
//!
//! 정규화는 검증보다 먼저 실행되고, 검증 결과 돌려받는 값도 정규화된 값입니다.
//! 같은 값에 `finalize`를 다시 호출하면 HTML 이스케이프가 중복 적용되므로
//! 원시 입력에 대해 한 번만 호출해야 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use tradebot_schemas::domain::dto::bots::request::BotSettings;
//! use tradebot_schemas::validation::Schema;
//!
//! let settings = BotSettings::from_json(r#"{"leverage": 5}"#)?;
//! assert_eq!(settings.order_size, 25.0);
//! ```
//!
//! 핸들러에서는 [`ValidatedJson`] 추출기를 사용합니다.

pub mod extractor;
pub mod rules;

pub use extractor::ValidatedJson;

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::{AppError, AppResult};

/// 외부 입력으로부터 생성되는 요청 스키마
pub trait Schema: DeserializeOwned + Validate + Sized {
    /// 로그와 에러 메시지에 사용되는 스키마 이름
    const NAME: &'static str;

    /// 검증 전에 적용할 정규화 단계
    ///
    /// 기본 구현은 값을 그대로 반환합니다.
    fn normalize(self) -> Self {
        self
    }

    /// 정규화 후 모든 필드 규칙을 검사합니다.
    fn finalize(self) -> AppResult<Self> {
        let normalized = self.normalize();

        if let Err(mut errors) = normalized.validate() {
            redact_sensitive_values(&mut errors);

            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            log::debug!("{} 검증 실패: {}", Self::NAME, fields.join(", "));
            return Err(AppError::InvalidFields(errors));
        }

        Ok(normalized)
    }

    /// 이미 파싱된 JSON 값에서 스키마를 생성합니다.
    ///
    /// 필수 필드 누락이나 타입 불일치는 serde가 첫 번째 오류에서 멈추므로
    /// 하나의 메시지만 담은 `ValidationError`로 반환됩니다.
    fn from_value(value: Value) -> AppResult<Self> {
        let raw: Self = serde_json::from_value(value)
            .map_err(|e| AppError::ValidationError(format!("{}: {}", Self::NAME, e)))?;
        raw.finalize()
    }

    /// JSON 문자열에서 스키마를 생성합니다.
    fn from_json(body: &str) -> AppResult<Self> {
        let raw: Self = serde_json::from_str(body)
            .map_err(|e| AppError::ValidationError(format!("{}: {}", Self::NAME, e)))?;
        raw.finalize()
    }
}

/// 민감 필드 에러에서 원래 값을 제거합니다.
///
/// `validator` derive는 사용자 정의 검증 함수가 반환한 뒤 `value` 파라미터를 덧붙이므로
/// `value_type`으로 표시된 에러는 여기서 값을 지웁니다.
pub(crate) fn redact_sensitive_values(errors: &mut ValidationErrors) {
    for kind in errors.errors_mut().values_mut() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors.iter_mut() {
                    if error.params.contains_key("value_type") {
                        error.params.remove("value");
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => redact_sensitive_values(nested),
            ValidationErrorsKind::List(items) => {
                for nested in items.values_mut() {
                    redact_sensitive_values(nested);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::{PasswordResetConfirm, UserRegister};

    #[test]
    fn test_sensitive_values_removed_from_raw_errors() {
        let err = PasswordResetConfirm::new("bad token!", "hunter").unwrap_err();

        match &err {
            AppError::InvalidFields(errors) => {
                for (_, field_errors) in errors.field_errors() {
                    for error in field_errors {
                        assert!(error.params.get("value").is_none());
                    }
                }
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!format!("{:?}", err).contains("hunter"));
    }

    #[test]
    fn test_plain_values_are_kept() {
        let err = UserRegister::new("nope", "hunter", "Ada Lovelace").unwrap_err();
        let email = err
            .violations()
            .into_iter()
            .find(|v| v.field == "email")
            .unwrap();

        assert_eq!(email.value, Some(serde_json::json!("nope")));
    }
}
