//! # 날짜/시간 유틸리티
//!
//! 저장 레코드의 타임스탬프를 읽기 위한 serde deserializer입니다.
//! 기존 레코드에는 오프셋이 포함된 RFC 3339 문자열과
//! 오프셋 없는 ISO-8601 문자열(`2024-05-01T12:00:00.123456`)이 섞여 있으므로 둘 다 허용하며,
//! 오프셋이 없는 값은 UTC로 해석합니다.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// 타임스탬프 문자열 파싱
///
/// # 허용 형식
/// - `2024-05-01T12:00:00Z`, `2024-05-01T15:00:00+03:00` (RFC 3339)
/// - `2024-05-01T12:00:00`, `2024-05-01T12:00:00.123456` (UTC로 해석)
/// - `2024-05-01 12:00:00.123456` (UTC로 해석)
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    value
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp '{}': {}", value, e))
}

/// 필수 타임스탬프 필드용 deserializer
///
/// `#[serde(deserialize_with = "deserialize_timestamp")]`
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// 선택적 타임스탬프 필드용 deserializer
///
/// `null`은 `None`이 됩니다. 필드 자체가 없는 경우를 위해
/// `#[serde(default, deserialize_with = "deserialize_optional_timestamp")]`로 사용합니다.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_timestamp("2024-05-01T15:00:00+03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_iso_as_utc() {
        let parsed = parse_timestamp("2024-05-01T12:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

        let with_fraction = parse_timestamp("2024-05-01T12:00:00.123456").unwrap();
        assert_eq!(with_fraction.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_space_separated() {
        let parsed = parse_timestamp("2024-05-01 08:30:00.5").unwrap();
        assert_eq!(parsed.day(), 1);
        assert_eq!(parsed.hour(), 8);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_deserialize_optional_timestamp() {
        #[derive(Deserialize)]
        struct Sample {
            #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
            at: Option<DateTime<Utc>>,
        }

        let sample: Sample = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert_eq!(sample.at, None);

        let sample: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(sample.at, None);

        let sample: Sample = serde_json::from_str(r#"{"at": "2024-05-01T12:00:00"}"#).unwrap();
        assert!(sample.at.is_some());

        assert!(serde_json::from_str::<Sample>(r#"{"at": "not a date"}"#).is_err());
    }
}
