//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성과 검증을 담당합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::domain::token::{AccessToken, TokenClaims};
use crate::errors::{AppError, AppResult};

/// 토큰 발급 인터페이스
///
/// 주체(사용자명)와 역할 목록, 수명을 받아 서명된 액세스 토큰을
/// 발급합니다. 서명 방식은 구현의 관심사입니다. 발급 실패는
/// [`AppError::TokenIssuance`]로 표현되어야 하며, 인증 실패와는
/// 구분되는 서버 측 결함으로 취급됩니다.
pub trait TokenIssuer: Send + Sync {
    /// 서명된 액세스 토큰 발급
    ///
    /// # 인자
    ///
    /// * `subject` - 토큰의 주체 (사용자명)
    /// * `roles` - 클레임에 내장할 역할 목록
    /// * `validity` - 액세스 토큰 수명
    fn issue(&self, subject: &str, roles: &[String], validity: Duration) -> AppResult<AccessToken>;
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰(단기)과 리프레시 토큰(장기)을 지원합니다.
pub struct JwtTokenService {
    settings: JwtSettings,
}

impl JwtTokenService {
    /// 주어진 설정으로 서비스 생성
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// 환경 변수 설정으로 서비스 생성
    pub fn from_env() -> Self {
        Self::new(JwtSettings::from_env())
    }

    /// 클레임을 구성하고 서명합니다
    ///
    /// 액세스 토큰과 리프레시 토큰이 동일한 클레임 구조를 사용하며
    /// 수명만 다릅니다. `jti`는 토큰마다 고유합니다.
    fn sign(
        &self,
        subject: &str,
        roles: &[String],
        now: DateTime<Utc>,
        validity: Duration,
    ) -> AppResult<String> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::TokenIssuance(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # 인자
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::TokenInvalid` - 토큰 만료, 잘못된 형식/서명
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let claims = token_service.verify_token(token)?;
    /// println!("Subject: {}", claims.sub);
    /// println!("Roles: {:?}", claims.roles);
    /// ```
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::TokenInvalid("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::TokenInvalid("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::TokenInvalid(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을
    /// 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenInvalid` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::TokenInvalid("유효하지 않은 인증 헤더 형식입니다".to_string())
        })
    }
}

impl TokenIssuer for JwtTokenService {
    /// 액세스/리프레시 토큰 쌍을 발급합니다
    ///
    /// 액세스 토큰은 전달받은 수명을, 리프레시 토큰은 설정의
    /// 리프레시 수명을 사용합니다. 두 토큰 모두 주체와 역할 목록을
    /// 클레임으로 내장합니다.
    fn issue(&self, subject: &str, roles: &[String], validity: Duration) -> AppResult<AccessToken> {
        let now = Utc::now();
        let expiration = now + validity;

        let access_token = self.sign(subject, roles, now, validity)?;
        let refresh_token = self.sign(subject, roles, now, self.settings.refresh_token_validity)?;

        Ok(AccessToken {
            username: subject.to_string(),
            authenticated: true,
            created: now,
            expiration,
            access_token,
            refresh_token: Some(refresh_token),
        })
    }
}
