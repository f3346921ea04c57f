//! # Configuration Module
//!
//! 스키마 계층이 참조하는 설정값을 환경 변수 기반으로 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경 판별
//! - [`subscription_config`] - 체험/구독 기간 및 가격
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use tradebot_schemas::config::{self, Environment, SubscriptionConfig};
//!
//! config::load_env_file();
//! config::init_logging();
//!
//! let env = Environment::current();
//! let trial_days = SubscriptionConfig::trial_days();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"               # dev, prod (.env 파일 선택)
//! export ENVIRONMENT="production"    # development, test, staging, production
//! export TRIAL_DAYS="7"
//! export SUBSCRIPTION_DAYS="30"
//! export SUBSCRIPTION_PRICE_USDT="10.0"
//! export RUST_LOG="info"
//! ```

pub mod data_config;
pub mod subscription_config;

pub use data_config::*;
pub use subscription_config::*;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 info 레벨을 사용합니다.
/// 이미 초기화된 경우 아무 작업도 하지 않습니다.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
