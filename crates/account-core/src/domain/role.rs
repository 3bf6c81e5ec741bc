//! 역할 기반 접근 제어 (RBAC).
//!
//! 사용자 역할 및 권한 테이블 정의.
//!
//! 역할과 액션은 닫힌 enum이므로 알 수 없는 역할로 권한을 조회하는 것은
//! 타입 수준에서 불가능합니다. 저장소 문자열에서 변환할 때만
//! [`Role::parse`]로 경계 검증을 수행합니다.

use serde::{Deserialize, Serialize};

/// 사용자 역할.
///
/// 시스템에서 사용자의 권한 수준을 정의합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx-support", sqlx(rename_all = "lowercase"))]
pub enum Role {
    /// 관리자 - 모든 액션 허용
    Admin,
    /// 에디터 - 조회 및 수정
    Editor,
    /// 작성자 - 조회 및 생성
    Writer,
    /// 일반 사용자 - 조회만 허용
    #[default]
    User,
}

impl Role {
    /// 역할이 특정 액션을 수행할 수 있는지 확인.
    ///
    /// | 역할   | 허용 액션                    |
    /// |--------|------------------------------|
    /// | admin  | read, create, update, delete |
    /// | editor | read, update                 |
    /// | writer | read, create                 |
    /// | user   | read                         |
    pub fn permits(&self, action: Action) -> bool {
        match self {
            Role::Admin => true,
            Role::Editor => matches!(action, Action::Read | Action::Update),
            Role::Writer => matches!(action, Action::Read | Action::Create),
            Role::User => matches!(action, Action::Read),
        }
    }

    /// 문자열에서 역할 파싱.
    ///
    /// 저장소 또는 외부 입력 경계에서 사용합니다. 네 가지 값 외에는
    /// `None`을 반환합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "editor" => Some(Role::Editor),
            "writer" => Some(Role::Writer),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    /// 모든 역할 목록.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Editor, Role::Writer, Role::User];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Writer => "writer",
            Role::User => "user",
        };
        write!(f, "{}", s)
    }
}

/// 리소스에 대한 액션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// 조회
    Read,
    /// 생성
    Create,
    /// 수정
    Update,
    /// 삭제
    Delete,
}

impl Action {
    /// 문자열에서 액션 파싱.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" => Some(Action::Read),
            "create" => Some(Action::Create),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_table() {
        // admin은 모든 액션 허용
        assert!(Role::Admin.permits(Action::Read));
        assert!(Role::Admin.permits(Action::Create));
        assert!(Role::Admin.permits(Action::Update));
        assert!(Role::Admin.permits(Action::Delete));

        // editor는 조회/수정만
        assert!(Role::Editor.permits(Action::Read));
        assert!(Role::Editor.permits(Action::Update));
        assert!(!Role::Editor.permits(Action::Create));
        assert!(!Role::Editor.permits(Action::Delete));

        // writer는 조회/생성만
        assert!(Role::Writer.permits(Action::Read));
        assert!(Role::Writer.permits(Action::Create));
        assert!(!Role::Writer.permits(Action::Update));
        assert!(!Role::Writer.permits(Action::Delete));

        // user는 조회만
        assert!(Role::User.permits(Action::Read));
        assert!(!Role::User.permits(Action::Create));
        assert!(!Role::User.permits(Action::Update));
        assert!(!Role::User.permits(Action::Delete));
    }

    #[test]
    fn test_all_roles_can_read() {
        for role in Role::ALL {
            assert!(role.permits(Action::Read));
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("EDITOR"), Some(Role::Editor));
        assert_eq!(Role::parse("Writer"), Some(Role::Writer));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_default_role() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Editor).unwrap();
        assert_eq!(json, "\"editor\"");

        let parsed: Role = serde_json::from_str("\"writer\"").unwrap();
        assert_eq!(parsed, Role::Writer);

        // 알 수 없는 역할은 역직렬화 실패
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn test_role_display_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(&role.to_string()), Some(role));
        }
    }
}
