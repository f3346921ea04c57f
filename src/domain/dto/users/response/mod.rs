//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장된 사용자 레코드를 클라이언트에게 안전한 형태로 전달합니다.
//!
//! - **데이터 은닉**: 비밀번호 해시, 암호화된 API 자격 증명은 응답에서 제외
//! - **타입 안전성**: 역할과 구독 상태는 닫힌 enum으로 직렬화
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "token_type": "bearer",
//!   "user": {
//!     "uid": "Xb3k...",
//!     "email": "trader@example.com",
//!     "full_name": "Ada Lovelace",
//!     "role": "user",
//!     "subscription_status": "trial",
//!     "trial_end_date": "2024-05-08T12:00:00Z",
//!     "subscription_end_date": null,
//!     "is_testnet": false,
//!     "has_api_keys": false
//!   }
//! }
//! ```

pub mod user_response;

pub use user_response::{AuthResponse, UserResponse};
