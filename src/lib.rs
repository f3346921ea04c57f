//! 트레이딩 봇 플랫폼 스키마 계층
//!
//! 트레이딩 봇 SaaS 백엔드의 경계에서 들어오고 나가는 데이터를 검증하고 정형화합니다.
//! 회원가입/로그인, 거래소 API 키 등록, 봇 제어/설정, 결제 알림 요청을 검증하고,
//! 사용자/거래/결제 요청 레코드를 타입이 있는 엔티티로 복원합니다.
//!
//! # Features
//!
//! - **요청 검증**: 정규화(trim, 소문자화, HTML 이스케이프) 후 모든 필드를 검사하여 위반 목록 집계
//! - **에러 응답**: `actix_web::ResponseError` 구현으로 400/422/500 JSON 응답 변환
//! - **레코드 복원**: 기본값 적용, 닫힌 값 집합 확인, 오프셋 없는 타임스탬프 허용
//! - **응답 정형화**: 비밀번호 해시와 암호화된 자격 증명을 제외한 사용자 응답
//!
//! 비밀번호 해싱, 토큰 발급, 저장소, 거래 실행, 결제 처리는 외부 협력자의 몫입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ HTTP 요청 본문     │
//! └──────────────────┘
//!          │ ValidatedJson<T> / Schema::from_value
//!          ▼
//! ┌──────────────────┐
//! │ domain::dto      │ ← 정규화 + 검증
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ 서비스 (외부)      │
//! └──────────────────┘
//!          │ Record::to_record / from_record
//!          ▼
//! ┌──────────────────┐
//! │ domain::entities │ ← 저장 레코드
//! └──────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use tradebot_schemas::domain::dto::UserRegister;
//! use tradebot_schemas::validation::Schema;
//!
//! let register = UserRegister::from_json(body)?;
//! assert_eq!(register.email, "trader@example.com");
//!
//! match BotSettings::from_value(json!({ "leverage": 25 })) {
//!     Err(e) => assert!(e.has_violation("leverage", "out_of_range")),
//!     Ok(_) => unreachable!(),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
pub mod validation;
