//! 검증된 JSON 본문 추출기
//!
//! `web::Json<T>` 대신 사용하면 핸들러에는 정규화와 검증을 통과한 값만 전달됩니다.
//!
//! ```rust,ignore
//! async fn register(body: ValidatedJson<UserRegister>) -> AppResult<HttpResponse> {
//!     let register = body.into_inner();
//!     // register.email은 이미 소문자, trim 적용됨
//! }
//! ```

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

use super::Schema;
use crate::errors::AppError;

/// 정규화와 검증을 통과한 요청 본문
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: Schema + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let value = body.await.map_err(|e| {
                log::debug!("{} 본문 파싱 실패: {}", T::NAME, e);
                AppError::ValidationError(format!("{}: {}", T::NAME, e))
            })?;

            let schema = T::from_value(value.into_inner())?;
            Ok(ValidatedJson(schema))
        })
    }
}
