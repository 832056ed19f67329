//! `SQLite` implementation of [`SedeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqlitePool, Transaction};

use sedes_app::ports::{SedeRepository, SedeTransaction};
use sedes_domain::error::SedesError;
use sedes_domain::id::SedeId;
use sedes_domain::sede::Sede;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Sede`].
struct Wrapper(Sede);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let nombre: Option<String> = row.try_get("nombre")?;
        let direccion: Option<String> = row.try_get("direccion")?;

        Ok(Self(Sede {
            id: Some(SedeId::new(id)),
            nombre,
            direccion,
        }))
    }
}

const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";
const INSERT: &str = "INSERT INTO sedes (nombre, direccion) VALUES (?, ?) RETURNING id";
const UPSERT: &str = "INSERT INTO sedes (id, nombre, direccion) VALUES (?, ?, ?) \
     ON CONFLICT(id) DO UPDATE SET nombre = excluded.nombre, direccion = excluded.direccion";
const EXISTS_BY_ID: &str = "SELECT EXISTS(SELECT 1 FROM sedes WHERE id = ?)";
const SELECT_BY_ID: &str = "SELECT id, nombre, direccion FROM sedes WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, nombre, direccion FROM sedes ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM sedes WHERE id = ?";

/// `SQLite`-backed sede repository.
pub struct SqliteSedeRepository {
    pool: SqlitePool,
}

impl SqliteSedeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SedeRepository for SqliteSedeRepository {
    type Transaction = SqliteSedeTransaction;

    fn begin(&self) -> impl Future<Output = Result<SqliteSedeTransaction, SedesError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Use-cases read before they write. Taking the write lock up front
            // makes competing scopes wait on the busy timeout instead of
            // failing with SQLITE_BUSY when upgrading a read lock.
            let tx = pool
                .begin_with(BEGIN_IMMEDIATE)
                .await
                .map_err(StorageError::from)?;
            Ok(SqliteSedeTransaction { tx })
        }
    }
}

/// One database transaction. Dropping it without
/// [`commit`](SedeTransaction::commit) rolls back.
pub struct SqliteSedeTransaction {
    tx: Transaction<'static, Sqlite>,
}

impl SedeTransaction for SqliteSedeTransaction {
    fn save(&mut self, sede: Sede) -> impl Future<Output = Result<Sede, SedesError>> + Send {
        async move {
            let id = match sede.id {
                Some(id) => {
                    sqlx::query(UPSERT)
                        .bind(id.get())
                        .bind(&sede.nombre)
                        .bind(&sede.direccion)
                        .execute(&mut *self.tx)
                        .await
                        .map_err(StorageError::from)?;
                    id
                }
                None => {
                    let id: i64 = sqlx::query_scalar(INSERT)
                        .bind(&sede.nombre)
                        .bind(&sede.direccion)
                        .fetch_one(&mut *self.tx)
                        .await
                        .map_err(StorageError::from)?;
                    SedeId::new(id)
                }
            };

            Ok(Sede {
                id: Some(id),
                ..sede
            })
        }
    }

    fn exists_by_id(
        &mut self,
        id: SedeId,
    ) -> impl Future<Output = Result<bool, SedesError>> + Send {
        async move {
            let exists: i64 = sqlx::query_scalar(EXISTS_BY_ID)
                .bind(id.get())
                .fetch_one(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(exists != 0)
        }
    }

    fn find_by_id(
        &mut self,
        id: SedeId,
    ) -> impl Future<Output = Result<Option<Sede>, SedesError>> + Send {
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn find_all(&mut self) -> impl Future<Output = Result<Vec<Sede>, SedesError>> + Send {
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete_by_id(&mut self, id: SedeId) -> impl Future<Output = Result<(), SedesError>> + Send {
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn commit(self) -> impl Future<Output = Result<(), SedesError>> + Send {
        async move {
            self.tx.commit().await.map_err(StorageError::from)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use sedes_app::services::sede_service::SedeService;
    use std::sync::Arc;

    async fn setup() -> SqliteSedeRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteSedeRepository::new(db.pool().clone())
    }

    fn test_sede() -> Sede {
        Sede::builder()
            .nombre("Ciudad Universitaria")
            .direccion("Calle 67 #53-108")
            .build()
    }

    async fn saved(repo: &SqliteSedeRepository, sede: Sede) -> Sede {
        let mut tx = repo.begin().await.unwrap();
        let stored = tx.save(sede).await.unwrap();
        tx.commit().await.unwrap();
        stored
    }

    #[tokio::test]
    async fn should_assign_id_and_retrieve_sede_when_saved() {
        let repo = setup().await;
        let stored = saved(&repo, test_sede()).await;
        let id = stored.id.unwrap();

        let mut tx = repo.begin().await.unwrap();
        let fetched = tx.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.nombre.as_deref(), Some("Ciudad Universitaria"));
    }

    #[tokio::test]
    async fn should_return_none_when_sede_not_found() {
        let repo = setup().await;
        let mut tx = repo.begin().await.unwrap();
        assert!(tx.find_by_id(SedeId::new(i64::MAX)).await.unwrap().is_none());
        assert!(!tx.exists_by_id(SedeId::new(i64::MAX)).await.unwrap());
    }

    #[tokio::test]
    async fn should_list_all_sedes_in_id_order() {
        let repo = setup().await;
        let first = saved(&repo, test_sede()).await;
        let second = saved(&repo, Sede::builder().nombre("Oriente").build()).await;

        let mut tx = repo.begin().await.unwrap();
        let all = tx.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn should_replace_sede_when_saved_with_existing_id() {
        let repo = setup().await;
        let mut sede = saved(&repo, test_sede()).await;
        sede.nombre = Some("Sede Oriente".to_string());
        sede.direccion = None;
        saved(&repo, sede.clone()).await;

        let mut tx = repo.begin().await.unwrap();
        let all = tx.find_all().await.unwrap();
        assert_eq!(all, vec![sede]);
    }

    #[tokio::test]
    async fn should_delete_sede_and_tolerate_missing_id() {
        let repo = setup().await;
        let id = saved(&repo, test_sede()).await.id.unwrap();

        let mut tx = repo.begin().await.unwrap();
        tx.delete_by_id(id).await.unwrap();
        tx.delete_by_id(id).await.unwrap();
        tx.commit().await.unwrap();

        let mut tx = repo.begin().await.unwrap();
        assert!(!tx.exists_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn should_roll_back_when_transaction_dropped() {
        let repo = setup().await;
        {
            let mut tx = repo.begin().await.unwrap();
            tx.save(test_sede()).await.unwrap();
        }

        let mut tx = repo.begin().await.unwrap();
        assert!(tx.find_all().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn should_apply_every_concurrent_update_when_file_backed() {
        let dir = tempfile::TempDir::new().unwrap();
        let db = Config {
            database_url: format!("sqlite:{}?mode=rwc", dir.path().join("sedes.db").display()),
        }
        .build()
        .await
        .unwrap();
        let service = Arc::new(SedeService::new(SqliteSedeRepository::new(
            db.pool().clone(),
        )));
        let id = service.create_sede(test_sede()).await.unwrap().id.unwrap();

        let handles: Vec<_> = (0..40)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    let body = Sede::builder().id(id).nombre(format!("N{i}"));
                    if i % 2 == 0 {
                        service.partial_update_sede(id, body.build()).await
                    } else {
                        service
                            .update_sede(id, body.direccion("Calle 10").build())
                            .await
                    }
                })
            })
            .collect();

        let mut written = Vec::new();
        for handle in handles {
            let updated = handle.await.unwrap().unwrap();
            written.push(updated.nombre.unwrap());
        }

        let stored = service.get_sede(id).await.unwrap();
        assert_eq!(written.len(), 40);
        assert!(written.contains(&stored.nombre.unwrap()));
    }
}
