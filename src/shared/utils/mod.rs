/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 세션 쿠키 생성/삭제/읽기
pub mod cookies;

pub use cookies::*;
