//! # Model Mapper - 타입 쌍 기반 매핑 레지스트리
//!
//! 이 모듈은 엔티티와 뷰 오브젝트처럼 구조적으로 유사한 두 레코드 타입
//! 사이의 필드 복사를 담당하는 매핑 레지스트리를 구현합니다. Java의
//! ModelMapper/Dozer가 하던 역할을 Rust에서 구현한 것으로, 리플렉션
//! 대신 serde 데이터 모델 위에서 필드를 매칭합니다.
//!
//! ## ModelMapper(Java)와의 상세 비교
//!
//! | ModelMapper 개념 | 이 시스템 | 비고 |
//! |------------------|-----------|------|
//! | `createTypeMap(S, D)` | `ModelMapperBuilder::type_map::<S, D>` | 방향별 등록 |
//! | `addMapping(S::a, D::b)` | `FieldOverrides::rename("b", "a")` | 필드명 재정의 |
//! | `mapper.map(obj, D.class)` | `ModelMapper::map::<S, D>(&obj)` | 타입 안전 |
//! | 런타임 리플렉션 | serde 직렬화 모델 | 필드명 = serde 이름 |
//! | 전역 싱글톤 | 명시적으로 생성된 불변 인스턴스 | DI로 전달 |
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 등록 (빌더, 시작 시 1회)
//!    ├─ type_map::<S, D>(overrides) → (TypeId, TypeId) 키로 저장
//!    ├─ 같은 순서쌍 재등록 → 기존 등록을 교체 (멱등)
//!    └─ build() → 불변 ModelMapper 생성 (이후 쓰기 불가)
//!
//! 2. 매핑 (읽기 전용, 요청마다)
//!    ├─ (TypeId::<S>, TypeId::<D>) 조회 → 미등록 시 UnmappedType
//!    ├─ source 직렬화 → JSON 오브젝트
//!    ├─ D::default() 직렬화 → 목적지 필드 목록 + 제로 값
//!    ├─ 필드별: 재정의된 이름 또는 동일한 이름으로 source에서 복사
//!    │   ├─ 값 종류(숫자/문자열/불리언...) 불일치 → IncompatibleField
//!    │   └─ source에 없는 필드 → 제로 값 유지
//!    └─ 완성된 오브젝트를 D로 역직렬화
//! ```
//!
//! ## 동시성
//!
//! 레지스트리는 `build()` 시점 이후 수정할 수 없습니다. 모든 매핑 호출은
//! 읽기 전용이므로 잠금 없이 여러 요청 스레드에서 동시에 사용할 수
//! 있습니다. 일반적으로 `Arc<ModelMapper>`로 공유합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use person_service_backend::mapper::{FieldOverrides, ModelMapper};
//!
//! let mapper = ModelMapper::builder()
//!     .type_map::<Person, PersonVO>(FieldOverrides::new().rename("key", "id"))
//!     .type_map::<PersonVO, Person>(FieldOverrides::new().rename("id", "key"))
//!     .build();
//!
//! let vo: PersonVO = mapper.map(&person)?;
//! let people: Vec<Person> = mapper.map_list(&vos)?;
//! ```

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult};

/// 목적지 필드명 → 소스 필드명 재정의 테이블
///
/// 이름이 다른 필드 쌍에만 사용합니다. 테이블에 없는 목적지 필드는
/// 동일한 이름의 소스 필드와 매칭됩니다.
#[derive(Debug, Clone, Default)]
pub struct FieldOverrides {
    renames: HashMap<String, String>,
}

impl FieldOverrides {
    /// 빈 재정의 테이블 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드명 재정의 추가
    ///
    /// # 인자
    /// * `dest_field` - 목적지 타입의 필드명
    /// * `source_field` - 값을 가져올 소스 타입의 필드명
    pub fn rename(mut self, dest_field: impl Into<String>, source_field: impl Into<String>) -> Self {
        self.renames.insert(dest_field.into(), source_field.into());
        self
    }

    /// 목적지 필드에 대응하는 소스 필드명 조회
    ///
    /// 재정의가 없으면 동일한 이름을 반환합니다.
    fn source_field<'a>(&'a self, dest_field: &'a str) -> &'a str {
        self.renames
            .get(dest_field)
            .map(String::as_str)
            .unwrap_or(dest_field)
    }
}

/// 등록된 타입 쌍 하나의 매핑 설정
struct TypeMap {
    /// 소스 타입 이름 (에러 메시지용)
    source_type: &'static str,
    /// 목적지 타입 이름 (에러 메시지용)
    dest_type: &'static str,
    /// 필드명 재정의 테이블
    overrides: FieldOverrides,
}

/// 매핑 레지스트리 빌더
///
/// 시작 시 한 번 구성하고 [`ModelMapperBuilder::build`]로 불변
/// 레지스트리를 생성합니다. 빌더가 유일한 쓰기 경로이므로, 생성 이후의
/// 동적 재등록은 지원하지 않습니다.
#[derive(Default)]
pub struct ModelMapperBuilder {
    maps: HashMap<(TypeId, TypeId), TypeMap>,
}

impl ModelMapperBuilder {
    /// 새 빌더 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 방향 있는 타입 쌍 등록
    ///
    /// `(S, D)` 순서쌍에 대한 매핑을 등록합니다. 양방향 변환이 필요하면
    /// `(D, S)`도 별도로 등록해야 합니다. 같은 순서쌍을 다시 등록하면
    /// 기존 등록이 교체됩니다 (멱등).
    ///
    /// # 인자
    ///
    /// * `overrides` - 이름이 다른 필드 쌍의 재정의 테이블
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let builder = ModelMapper::builder()
    ///     .type_map::<Person, PersonVO>(FieldOverrides::new().rename("key", "id"));
    /// ```
    pub fn type_map<S: 'static, D: 'static>(mut self, overrides: FieldOverrides) -> Self {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());
        self.maps.insert(
            key,
            TypeMap {
                source_type: short_type_name(type_name::<S>()),
                dest_type: short_type_name(type_name::<D>()),
                overrides,
            },
        );
        self
    }

    /// 불변 매핑 레지스트리 생성
    pub fn build(self) -> ModelMapper {
        ModelMapper { maps: self.maps }
    }
}

/// 타입 쌍 기반 매핑 레지스트리
///
/// 등록 테이블은 생성 이후 읽기 전용입니다. `Send + Sync`이므로
/// `Arc`로 감싸 여러 요청 핸들러에서 공유할 수 있습니다.
pub struct ModelMapper {
    maps: HashMap<(TypeId, TypeId), TypeMap>,
}

impl ModelMapper {
    /// 새 빌더 반환
    pub fn builder() -> ModelMapperBuilder {
        ModelMapperBuilder::new()
    }

    /// 해당 순서쌍의 매핑 등록 여부 확인
    pub fn is_registered<S: 'static, D: 'static>(&self) -> bool {
        self.maps
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }

    /// 등록된 타입 쌍 수
    pub fn registered_pairs(&self) -> usize {
        self.maps.len()
    }

    /// 단일 레코드 매핑
    ///
    /// 소스 레코드로부터 목적지 타입의 새 인스턴스를 생성합니다.
    /// 목적지의 각 필드는 재정의 테이블에 지정된 이름, 그 외에는 동일한
    /// 이름의 소스 필드에서 복사되며, 소스에 대응 필드가 없으면
    /// `D::default()`의 제로 값이 유지됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(D)` - 완성된 목적지 인스턴스
    ///
    /// # Errors
    ///
    /// * `AppError::UnmappedType` - `(S, D)` 순서쌍이 등록되지 않음
    /// * `AppError::IncompatibleField` - 매칭된 필드 쌍의 값 타입이
    ///   호환되지 않음 (매핑 시점에 감지, 부분 결과 없음)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let vo: PersonVO = mapper.map(&person)?;
    /// assert_eq!(vo.key, person.id);
    /// ```
    pub fn map<S, D>(&self, source: &S) -> AppResult<D>
    where
        S: Serialize + 'static,
        D: DeserializeOwned + Default + Serialize + 'static,
    {
        let type_map = self
            .maps
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .ok_or(AppError::UnmappedType {
                source_type: short_type_name(type_name::<S>()),
                dest_type: short_type_name(type_name::<D>()),
            })?;

        let source_fields = serialize_record(source, "source", type_map)?;
        // D::default()의 직렬화 결과가 목적지 필드 목록과 제로 값을 제공합니다
        let template = serialize_record(&D::default(), "destination", type_map)?;

        let mut assembled = Map::with_capacity(template.len());
        for (dest_field, zero_value) in &template {
            let source_field = type_map.overrides.source_field(dest_field);

            match source_fields.get(source_field) {
                Some(value) if !value.is_null() => {
                    // null이 아닌 제로 값과 종류가 다르면 호환 불가
                    if !zero_value.is_null() && json_kind(value) != json_kind(zero_value) {
                        return Err(AppError::IncompatibleField {
                            source_type: type_map.source_type,
                            dest_type: type_map.dest_type,
                            detail: format!(
                                "field '{}': expected {}, found {}",
                                dest_field,
                                json_kind(zero_value),
                                json_kind(value)
                            ),
                        });
                    }
                    assembled.insert(dest_field.clone(), value.clone());
                }
                // 소스에 없거나 null인 필드는 목적지 제로 값 유지
                _ => {
                    assembled.insert(dest_field.clone(), zero_value.clone());
                }
            }
        }

        // 종류 검사로 걸러지지 않는 값 수준의 불일치(숫자 범위 등)는
        // 역직렬화 단계에서 감지됩니다
        serde_json::from_value(Value::Object(assembled)).map_err(|e| {
            AppError::IncompatibleField {
                source_type: type_map.source_type,
                dest_type: type_map.dest_type,
                detail: e.to_string(),
            }
        })
    }

    /// 레코드 목록 매핑
    ///
    /// 입력 순서를 유지하며 각 요소에 [`ModelMapper::map`]을 적용합니다.
    /// 빈 입력은 빈 결과를 반환하고, 하나라도 실패하면 부분 결과 없이
    /// 단일 요소 호출과 동일한 에러를 전파합니다.
    pub fn map_list<S, D>(&self, sources: &[S]) -> AppResult<Vec<D>>
    where
        S: Serialize + 'static,
        D: DeserializeOwned + Default + Serialize + 'static,
    {
        sources.iter().map(|source| self.map(source)).collect()
    }
}

/// 레코드를 JSON 오브젝트로 직렬화
fn serialize_record<T: Serialize>(
    record: &T,
    role: &str,
    type_map: &TypeMap,
) -> AppResult<Map<String, Value>> {
    let value = serde_json::to_value(record).map_err(|e| AppError::IncompatibleField {
        source_type: type_map.source_type,
        dest_type: type_map.dest_type,
        detail: format!("{} serialization failed: {}", role, e),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::IncompatibleField {
            source_type: type_map.source_type,
            dest_type: type_map.dest_type,
            detail: format!("{} is not a structured record (found {})", role, json_kind(&other)),
        }),
    }
}

/// JSON 값의 종류 이름
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 전체 모듈 경로를 포함한 타입 이름에서 실제 타입 이름만 추출합니다.
///
/// `std::any::type_name::<T>()`는 전체 경로를 반환하므로
/// (예: `person_service_backend::domain::entities::person::Person`),
/// 에러 메시지에는 마지막 조각만 사용합니다.
fn short_type_name(type_name: &'static str) -> &'static str {
    match type_name.rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}
