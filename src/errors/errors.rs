//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 매핑 계층과 인증 계층을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 | 성격 | HTTP 상태 |
//! |------|------|-----------|
//! | `UnmappedType` | 설정 누락 (프로그래머 에러) | 500 |
//! | `IncompatibleField` | 잘못된 매핑 설정 (프로그래머 에러) | 500 |
//! | `InvalidCredentials` | 인증 실패 (클라이언트 에러, 단일 형태) | 401 |
//! | `TokenIssuance` | 토큰 서명 실패 (서버 에러) | 500 |
//! | `TokenInvalid` | 만료/위조된 토큰 (클라이언트 에러) | 401 |
//! | `Validation` | 입력값 검증 실패 | 400 |
//! | `Configuration` | 설정값 오류 | 500 |
//!
//! `InvalidCredentials`는 의도적으로 어떤 단계에서 실패했는지에 대한
//! 정보를 포함하지 않습니다. 사용자 존재 여부를 응답으로 구분할 수
//! 없어야 하기 때문입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use person_service_backend::errors::{AppError, AppResult};
//!
//! fn issue_token(secret: &str) -> AppResult<String> {
//!     if secret.is_empty() {
//!         return Err(AppError::Configuration("JWT_SECRET이 비어 있습니다".to_string()));
//!     }
//!     Ok("signed-token".to_string())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 매핑 계층과 인증 계층에서 발생할 수 있는 모든 종류의 에러를 포괄하는
/// 열거형입니다. 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    Validation(String),

    /// 등록되지 않은 타입 쌍에 대한 매핑 요청 (500 Internal Server Error)
    ///
    /// 매핑 레지스트리에 해당 (source, destination) 순서쌍이 등록되어
    /// 있지 않을 때 발생합니다. 누락된 등록을 의미하므로 즉시 실패합니다.
    #[error("No mapping registered: {source_type} -> {dest_type}")]
    UnmappedType {
        source_type: &'static str,
        dest_type: &'static str,
    },

    /// 매칭된 필드 쌍의 값 타입이 호환되지 않음 (500 Internal Server Error)
    ///
    /// 예: 숫자 필드를 문자열 필드로 매핑하도록 설정된 경우.
    /// 매핑 시점에 감지되며, 부분적으로 채워진 결과는 생성되지 않습니다.
    #[error("Incompatible field mapping {source_type} -> {dest_type}: {detail}")]
    IncompatibleField {
        source_type: &'static str,
        dest_type: &'static str,
        detail: String,
    },

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 사용자 미존재, 비밀번호 불일치, 인증기 내부 오류를 모두 하나의
    /// 동일한 에러로 표현합니다. 단계별 정보를 포함하지 않습니다.
    #[error("Invalid username or password supplied")]
    InvalidCredentials,

    /// 토큰 발급 실패 에러 (500 Internal Server Error)
    ///
    /// 서명 키 사용 불가 등 서버 측 결함입니다. 인증 실패와 구분됩니다.
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    /// 유효하지 않은 토큰 에러 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    /// 설정값 오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::TokenInvalid(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::Validation("Username is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_invalid_response() {
        let error = AppError::TokenInvalid("서명이 일치하지 않습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_issuance_is_server_fault() {
        let error = AppError::TokenIssuance("signing key unavailable".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_mapper_errors_are_server_faults() {
        let unmapped = AppError::UnmappedType {
            source_type: "Person",
            dest_type: "PersonVO",
        };
        let incompatible = AppError::IncompatibleField {
            source_type: "Person",
            dest_type: "PersonVO",
            detail: "field 'key': expected number, found string".to_string(),
        };

        assert_eq!(
            unmapped.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            incompatible.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        // 단계별 정보가 메시지에 포함되지 않아야 합니다
        let error = AppError::InvalidCredentials;
        assert_eq!(error.to_string(), "Invalid username or password supplied");
    }
}
