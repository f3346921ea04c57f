//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일/심볼 정규화, HTML 이스케이프
//! - [`datetime_utils`] - 저장 레코드 타임스탬프 파싱

pub mod string_utils;
pub mod datetime_utils;
