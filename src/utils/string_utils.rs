//! # 문자열 정규화 유틸리티
//!
//! 검증 전에 입력값을 정규화하는 함수들입니다.
//! 모든 함수는 순수 함수이며 입력 문자열을 변경하지 않고 새 문자열을 반환합니다.

/// 문자열 정리 (trim 후 반환)
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(trim_string("  Hello World  "), "Hello World");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 정규화 (앞뒤 공백 제거 후 소문자 변환)
///
/// 형식 검사는 하지 않습니다. `validation::rules::validate_email_format`과 함께 사용합니다.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 거래 심볼 정규화 (대문자 변환 후 앞뒤 공백 제거)
pub fn normalize_symbol(value: &str) -> String {
    value.to_uppercase().trim().to_string()
}

/// HTML 특수문자 이스케이프
///
/// `&`, `<`, `>`, `"`, `'` 다섯 문자를 엔티티로 변환합니다.
/// `&`를 먼저 처리하므로 이미 만들어진 엔티티가 다시 깨지지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(escape_html("<b>Al</b>"), "&lt;b&gt;Al&lt;/b&gt;");
/// assert_eq!(escape_html("O'Neil"), "O&#x27;Neil");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 자유 입력 텍스트 정리 (trim 후 HTML 이스케이프)
///
/// 길이 검사와 문자셋 검사보다 먼저 적용되어야 합니다.
/// 길이 제한은 이스케이프된 텍스트 기준입니다.
pub fn sanitize_text(value: &str) -> String {
    escape_html(value.trim())
}

/// 선택적 자유 입력 텍스트 정리
///
/// `None`은 그대로 `None`입니다. 빈 문자열은 빈 문자열로 유지됩니다.
pub fn sanitize_optional_text(value: Option<String>) -> Option<String> {
    value.map(|text| sanitize_text(&text))
}
