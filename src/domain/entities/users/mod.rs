//! # User Entities
//!
//! `users` 컬렉션에 저장되는 사용자 레코드입니다.
//!
//! ```rust,ignore
//! let user = UserData::from_registration(uid, &register, hash, Utc::now());
//! assert!(user.has_active_access(Utc::now()));
//! ```

pub mod user;

pub use user::UserData;
