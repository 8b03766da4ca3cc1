//! 데이터 액세스 계층 모듈
//!
//! 사용자 계정 레코드 조회를 담당하는 디렉터리 인터페이스를 제공합니다.
//! 실제 저장소 구현(데이터베이스 등)은 이 크레이트의 범위 밖이며,
//! 임베딩하는 쪽이 [`users::UserDirectory`] 트레이트를 구현하여
//! 주입합니다.

pub mod users;

pub use users::{InMemoryUserDirectory, UserDirectory};
