//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자의 자격 증명을 매핑합니다.

use std::fmt;

use serde::Deserialize;
use validator::Validate;

/// 로그인 자격 증명 구조체
///
/// 사용자명과 비밀번호 쌍입니다. 비밀번호는 평문으로 어떤 로그에도
/// 남지 않아야 하므로 `Debug` 출력에서 마스킹됩니다.
#[derive(Clone, Deserialize, Validate)]
pub struct AccountCredentials {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl AccountCredentials {
    /// 새 자격 증명 생성
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AccountCredentials {
    /// 비밀번호를 마스킹한 디버그 출력
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_password() {
        let credentials = AccountCredentials::new("alice", "top-secret");
        let output = format!("{:?}", credentials);

        assert!(output.contains("alice"));
        assert!(output.contains("********"));
        assert!(!output.contains("top-secret"));
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let empty_username = AccountCredentials::new("", "password");
        let empty_password = AccountCredentials::new("alice", "");
        let valid = AccountCredentials::new("alice", "password");

        assert!(empty_username.validate().is_err());
        assert!(empty_password.validate().is_err());
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"username": "alice", "password": "secret"}"#;
        let credentials: AccountCredentials = serde_json::from_str(json).unwrap();

        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, "secret");
    }
}
