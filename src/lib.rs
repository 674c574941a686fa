// Session API library
// main.rs와 통합 테스트(tests/)가 함께 사용
pub mod domains;
pub mod routes;
pub mod shared;
