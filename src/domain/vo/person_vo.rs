//! Person View Object
//!
//! 외부에 노출되는 Person 표현입니다. 엔티티와 구조적으로 동형이지만
//! 식별자 필드명이 `key`로 바뀌고, 자기 서술적 네비게이션 링크를
//! 부착할 수 있습니다.

use serde::{Deserialize, Serialize};

/// 자기 서술적 네비게이션 링크
///
/// 표현 계층이 부착하는 불투명한 링크 정보입니다. 링크를 어떻게
/// 조립하는지는 이 계층의 관심사가 아닙니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// 링크 관계 (예: "self")
    pub rel: String,
    /// 링크 대상 URI
    pub href: String,
}

impl Link {
    /// 새 링크 생성
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// Person 뷰 오브젝트
///
/// [`crate::domain::entities::Person`]과 동일한 스칼라 필드를 갖지만
/// 식별자는 `key`라는 이름으로 노출됩니다. `links`는 엔티티에 존재하지
/// 않는 필드이므로 매핑 시 항상 비어 있는 상태로 시작합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonVO {
    /// 외부 노출용 식별자 (엔티티의 `id`)
    pub key: i64,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 주소
    pub address: String,
    /// 성별
    pub gender: String,
    /// 네비게이션 링크 (표현 계층이 채움)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl PersonVO {
    /// 링크 부착
    ///
    /// 표현 계층이 조립한 링크를 뷰 오브젝트에 추가합니다.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }
}
