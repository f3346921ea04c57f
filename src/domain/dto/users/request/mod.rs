//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 정규화와 검증을 거친 값만 서비스 계층으로 넘기는 역할을 담당합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{HttpResponse, post};
//! use crate::domain::dto::users::request::UserRegister;
//! use crate::validation::ValidatedJson;
//!
//! #[post("/auth/register")]
//! async fn register(body: ValidatedJson<UserRegister>) -> AppResult<HttpResponse> {
//!     let register = body.into_inner();
//!     // register.email은 소문자, register.full_name은 이스케이프된 상태
//!     Ok(HttpResponse::Created().finish())
//! }
//! ```
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 400)
//! 2. **정규화**: trim, 소문자화, HTML 이스케이프
//! 3. **형식 검증**: 모든 필드를 검사하여 위반 목록 집계 (실패 시 422)
//!
//! 비밀번호와 토큰을 담은 타입은 `Debug` 출력에서 값을 가립니다.

pub mod login;
pub mod password_reset;
pub mod register;

pub use login::UserLogin;
pub use password_reset::{PasswordReset, PasswordResetConfirm};
pub use register::UserRegister;
