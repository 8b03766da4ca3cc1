//! Person 서비스 백엔드 코어
//!
//! Person REST 서비스의 핵심 계층을 담은 Rust 라이브러리입니다.
//! 엔티티와 뷰 오브젝트 사이의 객체 매핑 레지스트리,
//! 그리고 JWT 토큰 기반의 자격 증명 교환 흐름을 제공합니다.
//!
//! # Features
//!
//! - **객체 매핑**: 타입 쌍 단위로 등록되는 불변 매핑 레지스트리
//!   (필드명 재정의 지원, `id` ↔ `key`)
//! - **JWT 인증**: 사용자명/비밀번호를 서명된 액세스 토큰으로 교환
//! - **명시적 DI**: 협력자(인증기, 디렉터리, 발급기)를 생성 시점에 주입
//! - **단일 인증 실패 에러**: 사용자명 열거 공격 방지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 인증 교환, 토큰 발급/검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자 디렉터리 (역할 조회)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Domain + 매핑   │ ← 엔티티 ↔ 뷰 오브젝트 변환
//! └─────────────────┘
//! ```
//!
//! HTTP 라우팅과 영속 저장소는 이 크레이트의 범위 밖입니다. 임베딩하는
//! 서버가 핸들러를 연결하고 협력자 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use person_service_backend::config::JwtSettings;
//! use person_service_backend::mapper::mappings::person_mapper;
//! use person_service_backend::services::auth::{AuthService, JwtTokenService};
//!
//! // 매핑 레지스트리는 시작 시 한 번 구성합니다
//! let mapper = Arc::new(person_mapper());
//! let vo: PersonVO = mapper.map(&person)?;
//!
//! // 인증 교환 서비스
//! let settings = JwtSettings::from_env();
//! let validity = settings.access_token_validity;
//! let auth_service = AuthService::new(
//!     authenticator,
//!     user_directory,
//!     Arc::new(JwtTokenService::new(settings)),
//!     validity,
//! );
//! let token = auth_service.signin(&credentials).await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod mapper;
pub mod repositories;
pub mod services;
