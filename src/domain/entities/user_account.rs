//! User Account Record
//!
//! 사용자 디렉터리가 관리하는 계정 레코드입니다.
//! 인증 교환 흐름에서 역할(Role) 조회에 사용됩니다.

use serde::{Deserialize, Serialize};

/// 사용자 계정 레코드
///
/// 사용자명과 부여된 역할 목록을 담습니다. 역할은 단순 문자열 식별자이며,
/// 한 사용자는 0개 이상의 역할을 가질 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// 사용자명 (디렉터리 조회 키)
    pub username: String,
    /// 부여된 역할 목록
    pub roles: Vec<String>,
    /// 계정 활성화 여부
    pub enabled: bool,
}

impl UserAccount {
    /// 활성화된 새 계정 레코드 생성
    pub fn new(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
            enabled: true,
        }
    }

    /// 비활성화된 계정 레코드 생성
    pub fn disabled(username: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            username: username.into(),
            roles,
            enabled: false,
        }
    }

    /// 특정 역할 보유 여부 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
