//! 사용자 디렉터리 모듈

pub mod user_directory;

pub use user_directory::{InMemoryUserDirectory, UserDirectory};
