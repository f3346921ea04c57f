//! 거래소 API 키 등록 요청 DTO
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppResult;
use crate::utils::string_utils::trim_string;
use crate::validation::Schema;
use crate::validation::rules::validate_api_credential;

/// 거래소 API 키/시크릿 등록 요청
///
/// 평문 자격 증명을 담고 있으므로 암호화 계층으로 바로 넘기고 보관하지 않습니다.
/// 암호화된 값은 [`UserData::with_api_credentials`](crate::domain::entities::UserData::with_api_credentials)로 저장됩니다.
#[derive(Clone, Deserialize, Validate)]
pub struct ApiKeysUpdate {
    #[validate(custom(function = "validate_api_credential"))]
    pub api_key: String,

    #[validate(custom(function = "validate_api_credential"))]
    pub api_secret: String,

    /// 테스트넷 사용 여부
    #[serde(default)]
    pub is_testnet: bool,
}

impl ApiKeysUpdate {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        is_testnet: bool,
    ) -> AppResult<Self> {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            is_testnet,
        }
        .finalize()
    }
}

impl Schema for ApiKeysUpdate {
    const NAME: &'static str = "ApiKeysUpdate";

    fn normalize(self) -> Self {
        Self {
            api_key: trim_string(&self.api_key),
            api_secret: trim_string(&self.api_secret),
            ..self
        }
    }
}

impl fmt::Debug for ApiKeysUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeysUpdate")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("is_testnet", &self.is_testnet)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_keys_trimmed_and_defaulted() {
        let keys = ApiKeysUpdate::from_value(json!({
            "api_key": "  abcDEF1234567890 ",
            "api_secret": "\tSECRET0987654321\n"
        }))
        .unwrap();

        assert_eq!(keys.api_key, "abcDEF1234567890");
        assert_eq!(keys.api_secret, "SECRET0987654321");
        assert!(!keys.is_testnet);
    }

    #[test]
    fn test_api_keys_share_one_rule() {
        let err = ApiKeysUpdate::new("abc-123-xyz", "short", true).unwrap_err();

        assert!(err.has_violation("api_key", "invalid_api_credential_format"));
        assert!(err.has_violation("api_secret", "invalid_api_credential_length"));
    }

    #[test]
    fn test_api_keys_never_expose_values() {
        let err = ApiKeysUpdate::new("key_with_underscore", "abcdefghij", false).unwrap_err();
        let body = err.response_body(&crate::config::Environment::Development);

        assert!(!body.to_string().contains("key_with_underscore"));
        assert_eq!(body["details"]["violations"][0]["value_type"], "string");
    }

    #[test]
    fn test_api_keys_debug_redacts() {
        let keys = ApiKeysUpdate::new("abcDEF1234567890", "SECRET0987654321", true).unwrap();
        let debug = format!("{:?}", keys);

        assert!(!debug.contains("abcDEF1234567890"));
        assert!(debug.contains("is_testnet: true"));
    }
}
