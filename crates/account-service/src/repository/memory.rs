//! 인메모리 사용자 저장소.
//!
//! 테스트와 임베디드 용도로 사용하는 [`UserStore`] 구현입니다.
//! 레코드를 삽입 순서대로 `Vec`에 보관하므로 `list`의 순서 보장이
//! 자연스럽게 성립합니다.

use account_core::UserAccount;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};

/// 인메모리 사용자 저장소.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserAccount>>,
}

impl MemoryUserStore {
    /// 빈 저장소 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 레코드 수.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// 저장소가 비어 있는지 확인.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: UserAccount) -> Result<UserAccount, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.username == username) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(StoreError::NotFound(username.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<UserAccount>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn delete(&self, username: &str) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.username != username);
        if users.len() == before {
            return Err(StoreError::NotFound(username.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_core::Role;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(username: &str) -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: "$argon2id$test".to_string(),
            email: None,
            fullname: None,
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryUserStore::new();
        store.insert(record("ash")).await.unwrap();

        let found = store.find_by_username("ash").await.unwrap();
        assert_eq!(found.unwrap().username, "ash");

        // 대소문자 구분 정확 일치
        assert!(store.find_by_username("Ash").await.unwrap().is_none());
        assert!(store.find_by_username("nouser").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryUserStore::new();
        store.insert(record("ash")).await.unwrap();

        let result = store.insert(record("ash")).await;
        assert!(matches!(result, Err(StoreError::DuplicateUsername(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryUserStore::new();
        for name in ["first", "second", "third"] {
            store.insert(record(name)).await.unwrap();
        }

        let all = store.list().await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_update_password() {
        let store = MemoryUserStore::new();
        store.insert(record("ash")).await.unwrap();

        store.update_password("ash", "$argon2id$new").await.unwrap();
        let found = store.find_by_username("ash").await.unwrap().unwrap();
        assert_eq!(found.password_hash, "$argon2id$new");

        let result = store.update_password("nouser", "$x").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryUserStore::new();
        store.insert(record("ash")).await.unwrap();

        store.delete("ash").await.unwrap();
        assert!(store.is_empty().await);

        let result = store.delete("ash").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
