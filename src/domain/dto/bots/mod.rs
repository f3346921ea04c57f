//! # Bot Data Transfer Objects Module
//!
//! 사용자의 거래 봇 설정과 제어에 사용되는 요청 데이터 구조를 정의합니다.

pub mod request;

pub use request::*;
