//! Person Entity Implementation
//!
//! 영속 계층이 관리하는 표준 Person 레코드입니다.

use serde::{Deserialize, Serialize};

/// Person 엔티티
///
/// 시스템이 저장하는 표준 레코드입니다. 모든 필드는 단순 스칼라 값이며,
/// 외부 표현 계층에는 직접 노출되지 않고 [`crate::domain::vo::PersonVO`]로
/// 변환되어 전달됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// 숫자 식별자
    pub id: i64,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 주소
    pub address: String,
    /// 성별
    pub gender: String,
}

impl Person {
    /// 새 Person 엔티티 생성
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            gender: gender.into(),
        }
    }

    /// 전체 이름 (이름 + 성)
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
