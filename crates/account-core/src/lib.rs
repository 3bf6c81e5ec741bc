//! # Account Core
//!
//! 계정 서비스의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 계정 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 계정 레코드 및 입력 타입
//! - 역할 및 권한 정의
//! - 설정 관리
//! - 로깅 인프라
//! - 공통 에러 타입

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
