//! 실행 환경 설정 관리 모듈
//!
//! 현재 프로세스가 어떤 환경(개발, 테스트, 스테이징, 프로덕션)에서
//! 실행 중인지 판별합니다. 에러 응답의 상세 정보 노출 여부가 이 값에 따라 결정됩니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 내부 에러 상세 정보 노출
    Development,
    /// 테스트 환경 - 내부 에러 상세 정보 노출
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - 내부 에러 상세 정보 숨김
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Development`를 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_production() {
    ///     log::info!("프로덕션 모드");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Development)
    }

    /// 환경 이름 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값은 가장 보수적인 `Production`으로 취급합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// 5xx 응답 본문에 내부 에러 메시지를 포함해도 되는지 여부
    pub fn exposes_internal_errors(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}
