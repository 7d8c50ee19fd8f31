//! SQLite ModuleInfo Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{ModuleInfoRepositoryPort, RepositoryError};
use crate::domain::module_info::{ModuleDuration, ModuleInfo};

/// SQLite ModuleInfo Repository
pub struct SqliteModuleInfoRepository {
    pool: DbPool,
}

impl SqliteModuleInfoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ModuleInfoRow {
    id: i64,
    created_at: String,
    updated_at: String,
    module_name: String,
    module_duration: i64,
    exam_type: String,
    version: i64,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

fn narrow_i32(value: i64, column: &str) -> Result<i32, RepositoryError> {
    i32::try_from(value).map_err(|_| {
        RepositoryError::SerializationError(format!("{} out of range: {}", column, value))
    })
}

fn encode_exam_type(exam_type: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(exam_type).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<ModuleInfoRow> for ModuleInfo {
    type Error = RepositoryError;

    fn try_from(row: ModuleInfoRow) -> Result<Self, Self::Error> {
        Ok(ModuleInfo {
            id: row.id,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
            module_name: row.module_name,
            module_duration: ModuleDuration::new(narrow_i32(
                row.module_duration,
                "module_duration",
            )?),
            exam_type: serde_json::from_str(&row.exam_type)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            version: narrow_i32(row.version, "version")?,
        })
    }
}

#[async_trait]
impl ModuleInfoRepositoryPort for SqliteModuleInfoRepository {
    async fn insert(&self, mut module: ModuleInfo) -> Result<ModuleInfo, RepositoryError> {
        let (id, created_at, version): (i64, String, i64) = sqlx::query_as(
            r#"
            INSERT INTO module_info (created_at, updated_at, module_name, module_duration, exam_type)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, created_at, version
            "#,
        )
        .bind(module.created_at.to_rfc3339())
        .bind(module.updated_at.to_rfc3339())
        .bind(&module.module_name)
        .bind(module.module_duration.minutes())
        .bind(encode_exam_type(&module.exam_type)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        module.id = id;
        module.created_at = parse_timestamp(&created_at)?;
        module.version = narrow_i32(version, "version")?;

        Ok(module)
    }

    async fn get(&self, id: i64) -> Result<ModuleInfo, RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }

        let row: Option<ModuleInfoRow> = sqlx::query_as(
            r#"
            SELECT id, created_at, updated_at, module_name, module_duration, exam_type, version
            FROM module_info
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }

    async fn update(&self, mut module: ModuleInfo) -> Result<ModuleInfo, RepositoryError> {
        let version: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE module_info
            SET module_name = ?, module_duration = ?, exam_type = ?, updated_at = ?,
                version = version + 1
            WHERE id = ? AND version = ?
            RETURNING version
            "#,
        )
        .bind(&module.module_name)
        .bind(module.module_duration.minutes())
        .bind(encode_exam_type(&module.exam_type)?)
        .bind(module.updated_at.to_rfc3339())
        .bind(module.id)
        .bind(module.version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let version = version.ok_or(RepositoryError::EditConflict)?;
        module.version = narrow_i32(version, "version")?;

        Ok(module)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }

        let result = sqlx::query("DELETE FROM module_info WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
