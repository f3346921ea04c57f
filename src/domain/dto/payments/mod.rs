//! # Payment Data Transfer Objects Module
//!
//! 구독 결제 알림 요청 데이터 구조를 정의합니다.
//! 실제 결제 확인은 관리자가 수행하며, 이 모듈은 입력 검증만 담당합니다.

pub mod request;

pub use request::*;
