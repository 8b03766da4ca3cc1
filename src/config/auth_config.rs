//! 인증 관련 설정
//!
//! JWT 서명 비밀키와 토큰 수명을 관리합니다. 설정은 시작 시 한 번
//! 읽어 구조체로 만들어 필요한 컴포넌트에 주입합니다.

use chrono::Duration;
use log::{error, warn};

/// 개발 환경 전용 기본 서명 비밀키
const DEV_DEFAULT_SECRET: &str = "dev-only-insecure-secret";

/// JWT 토큰 설정
///
/// 액세스 토큰과 리프레시 토큰의 서명 비밀키와 수명을 담습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use person_service_backend::config::JwtSettings;
///
/// // 환경 변수에서 로드
/// let settings = JwtSettings::from_env();
///
/// // 테스트에서 명시적으로 생성
/// let settings = JwtSettings::new("test-secret", Duration::hours(1), Duration::days(30));
/// ```
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 수명
    pub access_token_validity: Duration,
    /// 리프레시 토큰 수명
    pub refresh_token_validity: Duration,
}

impl JwtSettings {
    /// 명시적인 값으로 설정 생성
    pub fn new(
        secret: impl Into<String>,
        access_token_validity: Duration,
        refresh_token_validity: Duration,
    ) -> Self {
        Self {
            secret: secret.into(),
            access_token_validity,
            refresh_token_validity,
        }
    }

    /// 환경 변수에서 설정 로드
    ///
    /// 다음 환경 변수를 읽습니다:
    ///
    /// * `JWT_SECRET` - 서명 비밀키 (누락 시 개발용 기본값 + 경고)
    /// * `JWT_EXPIRATION_HOURS` - 액세스 토큰 수명(시간, 기본값: 1)
    /// * `JWT_REFRESH_EXPIRATION_DAYS` - 리프레시 토큰 수명(일, 기본값: 30)
    ///
    /// 파싱에 실패한 값은 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET 미설정 - 개발용 기본값을 사용합니다. 운영 환경에서는 반드시 설정하세요");
            DEV_DEFAULT_SECRET.to_string()
        });

        let expiration_hours = std::env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<i64>()
            .unwrap_or_else(|e| {
                error!("JWT_EXPIRATION_HOURS 파싱 실패: {}. 기본값 1 사용", e);
                1
            });

        let refresh_expiration_days = std::env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .unwrap_or_else(|e| {
                error!("JWT_REFRESH_EXPIRATION_DAYS 파싱 실패: {}. 기본값 30 사용", e);
                30
            });

        Self {
            secret,
            access_token_validity: Duration::hours(expiration_hours),
            refresh_token_validity: Duration::days(refresh_expiration_days),
        }
    }
}

impl Default for JwtSettings {
    /// 개발 환경용 기본 설정 (액세스 1시간, 리프레시 30일)
    fn default() -> Self {
        Self::new(
            DEV_DEFAULT_SECRET,
            Duration::hours(1),
            Duration::days(30),
        )
    }
}
