//! # Domain Entities Module
//!
//! 저장소에 보관되는 레코드와 1:1로 대응되는 엔티티를 정의합니다.
//!
//! ## 요청 DTO와의 차이
//!
//! 엔티티는 이미 검증을 거쳐 저장된 데이터이므로 필드 규칙을 다시 적용하지 않습니다.
//! 대신 형태만 확인합니다:
//!
//! - 누락된 선택 필드 → `None`
//! - 기본값이 있는 필드 → 기본값
//! - 닫힌 값 집합(역할, 상태 등)에 없는 값 → 디코딩 실패
//! - 타임스탬프는 RFC 3339와 오프셋 없는 ISO-8601 모두 허용 (UTC로 해석)
//!
//! 형태가 맞지 않는 레코드는 데이터 손상으로 간주하여
//! [`AppError::RecordDecodeError`](crate::errors::AppError::RecordDecodeError) (500)로 보고합니다.
//!
//! ```rust,ignore
//! use tradebot_schemas::domain::entities::{Record, UserData};
//!
//! let user = UserData::from_record(document)?;
//! let document = user.to_record()?;
//! ```

pub mod payments;
pub mod trades;
pub mod users;

pub use payments::PaymentRequest;
pub use trades::TradeData;
pub use users::UserData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{AppError, AppResult, ErrorContext};

/// 저장소 레코드와 매핑되는 엔티티
pub trait Record: Serialize + DeserializeOwned + Sized {
    /// 레코드가 저장되는 컬렉션 이름
    const COLLECTION: &'static str;

    /// 저장된 레코드를 엔티티로 복원합니다.
    fn from_record(record: Value) -> AppResult<Self> {
        serde_json::from_value(record).map_err(|e| {
            log::warn!("{} 레코드 복원 실패: {}", Self::COLLECTION, e);
            AppError::RecordDecodeError(format!("{}: {}", Self::COLLECTION, e))
        })
    }

    /// 저장용 레코드로 변환합니다.
    fn to_record(&self) -> AppResult<Value> {
        serde_json::to_value(self).with_context(|| format!("{} 레코드 직렬화 실패", Self::COLLECTION))
    }
}
