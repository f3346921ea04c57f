//! # 필드 검증 규칙
//!
//! `validator`의 `#[validate(custom(function = "..."))]`에서 호출되는 검증 함수들입니다.
//! 각 함수는 이미 정규화된 값(trim, 소문자화, HTML 이스케이프 적용 후)을 받아
//! 규칙 하나를 검사하고, 실패 시 규칙 코드와 메시지를 담은 `ValidationError`를 반환합니다.
//!
//! ## 규칙 코드
//!
//! | 코드 | 규칙 |
//! |------|------|
//! | `invalid_email_format` | 이메일 패턴 불일치 |
//! | `weak_password` | 6자 미만 또는 영문자/숫자 누락 |
//! | `password_too_long` | 128자 초과 |
//! | `password_required` | 로그인 비밀번호 누락 |
//! | `name_too_short` / `name_too_long` / `invalid_full_name` | 이름 길이/문자셋 |
//! | `invalid_token_format` / `invalid_token_length` | 비밀번호 재설정 토큰 |
//! | `invalid_api_credential_format` / `invalid_api_credential_length` | 거래소 API 키/시크릿 |
//! | `invalid_action` | 봇 제어 명령 |
//! | `invalid_symbol_length` / `invalid_symbol_format` | 거래 심볼 |
//! | `invalid_timeframe` | 타임프레임 |
//! | `message_too_long` | 알림 메시지 |
//! | `out_of_range` | 숫자 설정값 범위 밖 또는 NaN/무한대 |
//!
//! 길이는 바이트가 아닌 문자 수 기준입니다.
//!
//! 비밀번호, 토큰, API 자격 증명은 에러 파라미터에 값을 남기지 않고
//! `value_type`만 기록합니다.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::domain::models::{BotAction, Timeframe};

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 128;
pub const FULL_NAME_MIN_LENGTH: usize = 2;
pub const FULL_NAME_MAX_LENGTH: usize = 100;
pub const TOKEN_MIN_LENGTH: usize = 10;
pub const TOKEN_MAX_LENGTH: usize = 200;
pub const API_CREDENTIAL_MIN_LENGTH: usize = 10;
pub const API_CREDENTIAL_MAX_LENGTH: usize = 200;
pub const SYMBOL_MIN_LENGTH: usize = 3;
pub const SYMBOL_MAX_LENGTH: usize = 20;
pub const MESSAGE_MAX_LENGTH: usize = 500;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

// 영문자, 터키어 문자, 공백, 하이픈, 마침표, 아포스트로피
static FULL_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-ZğüşıöçĞÜŞİÖÇ\s.'-]+$"));

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9_-]+$"));

static API_CREDENTIAL_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9]+$"));

// USDT 마켓만 허용
static SYMBOL_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{2,10}USDT$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in validation pattern must compile")
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// 문제가 된 값을 `value` 파라미터로 함께 기록
fn violation_with_value(code: &'static str, message: &'static str, value: &str) -> ValidationError {
    let mut error = violation(code, message);
    error.add_param(Cow::Borrowed("value"), &value);
    error
}

/// 민감 필드용: 값 대신 타입만 기록
fn sensitive_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = violation(code, message);
    error.add_param(Cow::Borrowed("value_type"), &"string");
    error
}

/// 이메일 형식 검증
///
/// `normalize_email` 적용 후의 값(소문자, trim)을 기대합니다.
///
/// ```rust,ignore
/// assert!(validate_email_format("trader@example.com").is_ok());
/// assert!(validate_email_format("trader@example").is_err());
/// ```
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(violation_with_value(
            "invalid_email_format",
            "Invalid email format",
            email,
        ));
    }
    Ok(())
}

/// 비밀번호 강도 검증 (회원가입, 비밀번호 재설정)
///
/// - 길이: 6-128자
/// - 영문자 1개 이상, 숫자 1개 이상 (특수문자 요구 없음)
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let length = char_len(password);
    if length < PASSWORD_MIN_LENGTH {
        return Err(sensitive_violation(
            "weak_password",
            "Password must be at least 6 characters",
        ));
    }
    if length > PASSWORD_MAX_LENGTH {
        return Err(sensitive_violation("password_too_long", "Password too long"));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(sensitive_violation(
            "weak_password",
            "Password must contain at least one letter and one number",
        ));
    }

    Ok(())
}

/// 재설정용 새 비밀번호 검증
///
/// 규칙은 회원가입과 같지만 영문자/숫자 검사가 최대 길이 검사보다 먼저입니다.
pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    let length = char_len(password);
    if length < PASSWORD_MIN_LENGTH {
        return Err(sensitive_violation(
            "weak_password",
            "Password must be at least 6 characters",
        ));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(sensitive_violation(
            "weak_password",
            "Password must contain at least one letter and one number",
        ));
    }

    if length > PASSWORD_MAX_LENGTH {
        return Err(sensitive_violation("password_too_long", "Password too long"));
    }

    Ok(())
}

/// 로그인 비밀번호 검증 (길이만 확인)
pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    let length = char_len(password);
    if length == 0 {
        return Err(sensitive_violation("password_required", "Password is required"));
    }
    if length > PASSWORD_MAX_LENGTH {
        return Err(sensitive_violation("password_too_long", "Password too long"));
    }
    Ok(())
}

/// 이름 검증
///
/// HTML 이스케이프가 적용된 값을 검사합니다. 이스케이프 결과에 `&`, `;`, `#`이
/// 생기므로 `<b>` 같은 마크업이나 따옴표가 포함된 입력은 문자셋 검사에서 거부됩니다.
pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    let length = char_len(full_name);
    if length < FULL_NAME_MIN_LENGTH {
        return Err(violation_with_value(
            "name_too_short",
            "Full name must be at least 2 characters",
            full_name,
        ));
    }
    if length > FULL_NAME_MAX_LENGTH {
        return Err(violation_with_value(
            "name_too_long",
            "Full name too long",
            full_name,
        ));
    }
    if !FULL_NAME_PATTERN.is_match(full_name) {
        return Err(violation_with_value(
            "invalid_full_name",
            "Full name contains invalid characters",
            full_name,
        ));
    }
    Ok(())
}

/// 비밀번호 재설정 토큰 검증
///
/// 영문자, 숫자, `-`, `_`만 허용 (10-200자).
pub fn validate_reset_token(token: &str) -> Result<(), ValidationError> {
    if !TOKEN_PATTERN.is_match(token) {
        return Err(sensitive_violation("invalid_token_format", "Invalid token format"));
    }
    let length = char_len(token);
    if !(TOKEN_MIN_LENGTH..=TOKEN_MAX_LENGTH).contains(&length) {
        return Err(sensitive_violation("invalid_token_length", "Invalid token length"));
    }
    Ok(())
}

/// 거래소 API 키/시크릿 공통 검증
///
/// 토큰과 달리 `-`, `_`도 허용하지 않습니다. 영문자와 숫자만 (10-200자).
pub fn validate_api_credential(credential: &str) -> Result<(), ValidationError> {
    let length = char_len(credential);
    if !(API_CREDENTIAL_MIN_LENGTH..=API_CREDENTIAL_MAX_LENGTH).contains(&length) {
        return Err(sensitive_violation(
            "invalid_api_credential_length",
            "API credential length must be between 10-200 characters",
        ));
    }
    if !API_CREDENTIAL_PATTERN.is_match(credential) {
        return Err(sensitive_violation(
            "invalid_api_credential_format",
            "API credentials contain invalid characters",
        ));
    }
    Ok(())
}

/// 거래 심볼 검증
///
/// 길이 검사는 사전 필터이고, 최종 판단은 `[A-Z]{2,10}USDT` 패턴이 합니다.
pub fn validate_trading_symbol(symbol: &str) -> Result<(), ValidationError> {
    let length = char_len(symbol);
    if !(SYMBOL_MIN_LENGTH..=SYMBOL_MAX_LENGTH).contains(&length) {
        return Err(violation_with_value(
            "invalid_symbol_length",
            "Symbol length must be between 3-20 characters",
            symbol,
        ));
    }
    if !SYMBOL_PATTERN.is_match(symbol) {
        return Err(violation_with_value(
            "invalid_symbol_format",
            "Invalid symbol format. Must be like BTCUSDT",
            symbol,
        ));
    }
    Ok(())
}

pub fn validate_bot_action(action: &str) -> Result<(), ValidationError> {
    action.parse::<BotAction>().map(|_| ()).map_err(|_| {
        violation_with_value(
            "invalid_action",
            "Action must be either \"start\" or \"stop\"",
            action,
        )
    })
}

pub fn validate_timeframe(timeframe: &str) -> Result<(), ValidationError> {
    timeframe.parse::<Timeframe>().map(|_| ()).map_err(|_| {
        violation_with_value(
            "invalid_timeframe",
            "Timeframe must be one of: 1m, 5m, 15m, 1h, 4h",
            timeframe,
        )
    })
}

/// 실수 설정값은 유한해야 함
///
/// NaN은 모든 비교가 거짓이라 `range` 검사를 통과하므로 따로 거부합니다.
pub fn validate_finite_number(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(violation("out_of_range", "Value must be a finite number"));
    }
    Ok(())
}

/// 결제 요청 금액은 0보다 큰 유한한 값이어야 함
pub fn validate_payment_amount(amount_usdt: f64) -> Result<(), ValidationError> {
    if !amount_usdt.is_finite() || amount_usdt <= 0.0 {
        return Err(violation(
            "out_of_range",
            "Payment amount must be a positive number",
        ));
    }
    Ok(())
}

/// 알림 메시지 길이 검증 (이스케이프 후 500자 이하)
pub fn validate_message_length(message: &str) -> Result<(), ValidationError> {
    if char_len(message) > MESSAGE_MAX_LENGTH {
        return Err(violation_with_value(
            "message_too_long",
            "Message too long",
            message,
        ));
    }
    Ok(())
}
