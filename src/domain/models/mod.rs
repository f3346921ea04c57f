//! # Domain Models Module
//!
//! 도메인의 닫힌 값 집합(역할, 상태, 명령 등)을 정의하는 모듈입니다.
//!
//! ## 공통 형태
//!
//! 모든 값 집합은 같은 형태를 따릅니다:
//!
//! - `serde` 직렬화 이름 = 저장/전송되는 문자열 표현
//! - `ALLOWED` - 허용되는 문자열 목록 (에러 메시지용)
//! - `as_str()` / `Display` - 문자열 표현
//! - `FromStr` - 대소문자를 구분하는 정확한 일치만 허용,
//!   실패 시 [`AppError::InvalidEnumValue`](crate::errors::AppError::InvalidEnumValue)
//!
//! ```rust,ignore
//! use tradebot_schemas::domain::models::Timeframe;
//!
//! let timeframe: Timeframe = "15m".parse()?;
//! assert_eq!(timeframe.minutes(), 15);
//! ```
//!
//! ## 모듈 구성
//!
//! | 모듈 | 타입 |
//! |------|------|
//! | [`account`] | `UserRole`, `SubscriptionStatus` |
//! | [`bot`] | `BotStatus`, `BotAction`, `Timeframe` |
//! | [`trade`] | `TradeSide`, `TradeStatus` |
//! | [`payment`] | `PaymentStatus` |

pub mod account;
pub mod bot;
pub mod trade;
pub mod payment;

pub use account::{SubscriptionStatus, UserRole};
pub use bot::{BotAction, BotStatus, Timeframe};
pub use payment::PaymentStatus;
pub use trade::{TradeSide, TradeStatus};
