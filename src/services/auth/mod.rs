//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증을 담당하는 서비스들을 제공합니다.
//! 자격 증명을 서명된 토큰으로 교환하는 흐름과 토큰의 생성/검증을
//! 지원합니다.
//!
//! # Features
//!
//! - 사용자명/비밀번호 → 액세스 토큰 교환 (signin)
//! - JWT 액세스/리프레시 토큰 생성과 검증
//! - 모든 인증 단계 실패의 단일 에러 수렴 (사용자명 열거 방지)
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//! - 비밀번호는 어떤 로그에도 기록되지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use person_service_backend::services::auth::{AuthService, JwtTokenService};
//!
//! let token_service = Arc::new(JwtTokenService::from_env());
//! let auth_service = AuthService::new(authenticator, directory, token_service, validity);
//! let token = auth_service.signin(&credentials).await?;
//! ```

pub mod auth_service;
pub mod token_service;

pub use auth_service::{AuthService, Authenticator};
pub use token_service::{JwtTokenService, TokenIssuer};
