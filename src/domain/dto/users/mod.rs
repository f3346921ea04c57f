//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   ├── register.rs            # 회원가입
//! │   ├── login.rs               # 로그인
//! │   └── password_reset.rs      # 비밀번호 재설정 요청/확정
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs       # 사용자 정보, 인증 응답
//! ```
//!
//! ## 검증 규칙
//!
//! - **이메일**: trim + 소문자 변환 후 형식 검사
//! - **비밀번호**: 6-128자, 영문자와 숫자 각 1개 이상 (로그인은 1-128자만 확인)
//! - **이름**: trim + HTML 이스케이프 후 2-100자, 영문/터키어 문자, 공백, `-`, `.`
//! - **재설정 토큰**: 영문자, 숫자, `-`, `_` / 10-200자
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::{AuthResponse, UserRegister};
//! use crate::domain::entities::UserData;
//!
//! let register = UserRegister::new("Trader@Example.com", "abc123", "Ada Lovelace")?;
//! let user = UserData::new_trial(uid, &register, password_hash, Utc::now(), 7);
//! let response = AuthResponse::new(access_token, &user);
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
