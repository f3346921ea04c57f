//! # Domain Layer Module
//!
//! 트레이딩 봇 플랫폼의 데이터 구조를 정의하는 도메인 계층입니다.
//!
//! ## 아키텍처 구조
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │          Presentation Layer (HTTP)          │
//! │        ValidatedJson<T> / AppError          │
//! ├─────────────────────────────────────────────┤
//! │              Domain Layer                   │  ← 이 모듈
//! │  ┌──────────┐ ┌──────────┐ ┌─────────────┐  │
//! │  │   DTOs   │ │ Entities │ │   Models    │  │
//! │  │ 요청 검증 │ │ 저장 레코드 │ │ 닫힌 값 집합 │  │
//! │  └──────────┘ └──────────┘ └─────────────┘  │
//! ├─────────────────────────────────────────────┤
//! │   외부 협력자 (인증, 저장소, 암호화, 거래소)      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! ### 📦 [`dto`] - 요청/응답 데이터
//!
//! 외부 입력은 모두 이 모듈의 타입을 통해 들어옵니다.
//! 정규화와 검증을 통과한 값만 생성됩니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::BotControl;
//!
//! let control = BotControl::new("start", Some("btcusdt"))?;
//! assert_eq!(control.symbol.as_deref(), Some("BTCUSDT"));
//! ```
//!
//! ### 🏛️ [`entities`] - 저장 레코드
//!
//! 사용자, 거래, 결제 요청 레코드입니다. 저장소에서 읽은 값은 신뢰된 데이터로
//! 취급하여 필드 규칙을 다시 적용하지 않고 형태만 확인합니다.
//!
//! ### 🎯 [`models`] - 닫힌 값 집합
//!
//! 역할, 구독 상태, 봇 상태/명령, 타임프레임, 거래 방향/상태, 결제 상태.

pub mod dto;
pub mod entities;
pub mod models;

pub use entities::{PaymentRequest, Record, TradeData, UserData};
pub use models::*;
