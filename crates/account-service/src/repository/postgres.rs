//! Postgres 사용자 저장소.
//!
//! `user_accounts` 테이블에 대한 sqlx 기반 구현입니다. 스키마는
//! `migrations/0001_create_user_accounts.sql`에 있습니다.

use std::time::Duration;

use account_core::{DatabaseConfig, UserAccount};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::{StoreError, UserStore};

/// Postgres 기반 사용자 저장소.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// 기존 풀로 저장소 생성.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 설정으로 풀을 만들어 연결.
    ///
    /// 연결 URL은 설정의 `database.url`을 우선 사용하고, 없으면
    /// `DATABASE_URL` 환경 변수를 읽습니다. 둘 다 없으면 실패합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let url = match &config.url {
            Some(url) => url.clone(),
            None => dotenvy::var("DATABASE_URL").map_err(|_| {
                StoreError::Database(sqlx::Error::Configuration(
                    "database.url 설정 또는 DATABASE_URL 환경 변수가 필요합니다".into(),
                ))
            })?,
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(&url)
            .await?;

        info!(max_connections = config.max_connections, "Postgres 사용자 저장소 연결됨");
        Ok(Self { pool })
    }

    /// 내부 풀 참조.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: UserAccount) -> Result<UserAccount, StoreError> {
        let inserted = sqlx::query_as::<_, UserAccount>(
            r#"
            INSERT INTO user_accounts
                (id, username, password_hash, email, fullname, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, username, password_hash, email, fullname, role, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.fullname)
        .bind(user.role)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::DuplicateUsername(user.username.clone())
            }
            other => StoreError::Database(other),
        })?;

        Ok(inserted)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, StoreError> {
        let user = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT id, username, password_hash, email, fullname, role, created_at, updated_at
            FROM user_accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE user_accounts
            SET password_hash = $2, updated_at = NOW()
            WHERE username = $1
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(username.to_string()));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<UserAccount>, StoreError> {
        let users = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT id, username, password_hash, email, fullname, role, created_at, updated_at
            FROM user_accounts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn delete(&self, username: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM user_accounts WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(username.to_string()));
        }
        Ok(())
    }
}
