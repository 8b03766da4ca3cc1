//! 애플리케이션 표준 매핑 구성
//!
//! 서비스가 사용하는 엔티티 ↔ 뷰 오브젝트 타입 쌍을 등록합니다.
//! 프로세스 시작 시 한 번 호출하여 생성한 레지스트리를 `Arc`로 감싸
//! 필요한 곳에 주입합니다.

use crate::domain::entities::Person;
use crate::domain::vo::PersonVO;
use crate::mapper::{FieldOverrides, ModelMapper};

/// Person 매핑 레지스트리 생성
///
/// 두 방향 모두 별도의 등록입니다:
///
/// - `Person → PersonVO`: 목적지 `key` ← 소스 `id`
/// - `PersonVO → Person`: 목적지 `id` ← 소스 `key`
///
/// 나머지 필드는 동일한 이름으로 매칭됩니다. `PersonVO.links`는
/// 엔티티에 대응 필드가 없으므로 항상 비어 있는 상태로 생성됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use person_service_backend::mapper::mappings::person_mapper;
///
/// let mapper = Arc::new(person_mapper());
/// let vo: PersonVO = mapper.map(&person)?;
/// ```
pub fn person_mapper() -> ModelMapper {
    ModelMapper::builder()
        .type_map::<Person, PersonVO>(FieldOverrides::new().rename("key", "id"))
        .type_map::<PersonVO, Person>(FieldOverrides::new().rename("id", "key"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
        Person::new(7, "Nelson", "Piquet", "Brasília - DF - Brasil", "Male")
    }

    #[test]
    fn test_entity_to_view_object() {
        let person = sample_person();
        let vo: PersonVO = person_mapper().map(&person).unwrap();

        assert_eq!(vo.key, 7);
        assert_eq!(vo.first_name, "Nelson");
        assert_eq!(vo.last_name, "Piquet");
        assert_eq!(vo.address, "Brasília - DF - Brasil");
        assert_eq!(vo.gender, "Male");
        assert!(vo.links.is_empty());
    }

    #[test]
    fn test_view_object_to_entity_is_exact_inverse() {
        let mapper = person_mapper();
        let person = sample_person();

        let vo: PersonVO = mapper.map(&person).unwrap();
        let back: Person = mapper.map(&vo).unwrap();

        assert_eq!(back, person);
    }

    #[test]
    fn test_links_do_not_leak_into_entity() {
        let mapper = person_mapper();
        let mut vo: PersonVO = mapper.map(&sample_person()).unwrap();
        vo.add_link(crate::domain::vo::Link::new("self", "/api/person/v1/7"));

        let back: Person = mapper.map(&vo).unwrap();

        assert_eq!(back, sample_person());
    }

    #[test]
    fn test_person_list_mapping() {
        let mapper = person_mapper();
        let people: Vec<Person> = (1..=3)
            .map(|i| Person::new(i, format!("First{}", i), format!("Last{}", i), "Addr", "Female"))
            .collect();

        let vos: Vec<PersonVO> = mapper.map_list(&people).unwrap();

        assert_eq!(vos.len(), 3);
        for (person, vo) in people.iter().zip(&vos) {
            assert_eq!(vo.key, person.id);
            assert_eq!(vo.first_name, person.first_name);
        }

        let empty: Vec<PersonVO> = mapper.map_list(&[] as &[Person]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_both_directions_registered() {
        let mapper = person_mapper();

        assert!(mapper.is_registered::<Person, PersonVO>());
        assert!(mapper.is_registered::<PersonVO, Person>());
        assert_eq!(mapper.registered_pairs(), 2);
    }
}
