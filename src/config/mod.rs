//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다. 환경 변수 기반의 설정값들을
//! 중앙집중식으로 관리하며, 개발 환경에서만 안전한 기본값을 제공합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="1"
//! export JWT_REFRESH_EXPIRATION_DAYS="30"
//!
//! # 환경 프로파일
//! export PROFILE="dev"   # dev 또는 prod
//! ```

pub mod auth_config;

pub use auth_config::JwtSettings;

use log::{error, info};

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
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
            // 기본 .env 파일 로드
            dotenv::dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨입니다.
///
/// # Examples
///
/// ```bash
/// # 특정 모듈만 debug
/// RUST_LOG=person_service_backend::services=debug cargo run
/// ```
pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
}
