//! # Data Transfer Objects Module
//!
//! HTTP 요청/응답 경계에서 사용되는 데이터 구조를 정의합니다.
//!
//! ## 모듈 구성
//!
//! | 모듈 | 요청 DTO | 응답 DTO |
//! |------|----------|----------|
//! | [`users`] | `UserRegister`, `UserLogin`, `PasswordReset`, `PasswordResetConfirm` | `UserResponse`, `AuthResponse` |
//! | [`bots`] | `ApiKeysUpdate`, `BotControl`, `BotSettings` | - |
//! | [`payments`] | `PaymentNotification` | - |
//!
//! 모든 요청 DTO는 [`Schema`](crate::validation::Schema)를 구현하며,
//! 각 그룹은 서로를 참조하지 않습니다.

pub mod bots;
pub mod payments;
pub mod users;

pub use bots::{ApiKeysUpdate, BotControl, BotSettings};
pub use payments::PaymentNotification;
pub use users::{AuthResponse, PasswordReset, PasswordResetConfirm, UserLogin, UserRegister, UserResponse};
