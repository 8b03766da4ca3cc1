//! JWT 인증 토큰 구조체
//!
//! RFC 7519 JWT 표준 클레임과 클라이언트에 전달되는 토큰 응답을 정의합니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자명)
/// - `roles`: 발급 시점의 역할 목록
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 식별자
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자명)
    pub sub: String,
    /// 사용자 역할 목록 (권한 기반 접근 제어용)
    pub roles: Vec<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 토큰 고유 식별자 (UUID)
    pub jti: String,
}

/// 액세스 토큰 응답 구조체
///
/// 클라이언트에게 전달되는 서명된 토큰과 부가 정보입니다.
/// 역할 목록은 응답이 아니라 토큰의 클레임에 내장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// 토큰의 주체 (사용자명)
    pub username: String,
    /// 인증 성공 여부 (발급된 토큰은 항상 true)
    pub authenticated: bool,
    /// 토큰 발급 시각
    pub created: DateTime<Utc>,
    /// 액세스 토큰 만료 시각
    pub expiration: DateTime<Utc>,
    /// 서명된 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰, 선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl AccessToken {
    /// 만료 시각이 주어진 기준 시각 이후인지 확인
    pub fn is_valid_at(&self, instant: DateTime<Utc>) -> bool {
        self.expiration > instant
    }
}
