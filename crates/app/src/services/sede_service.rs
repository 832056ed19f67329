//! Sede service — use-cases for managing sedes.
//!
//! Every use-case runs inside one transaction scope from the repository.
//! Validation failures return before the scope is committed, so they never
//! leave a trace in the store.

use sedes_domain::error::{ENTITY_NAME, InvalidRequestError, NotFoundError, SedesError};
use sedes_domain::id::SedeId;
use sedes_domain::sede::Sede;

use crate::ports::{SedeRepository, SedeTransaction};

/// Application service for sede CRUD operations.
pub struct SedeService<R> {
    repo: R,
}

impl<R: SedeRepository> SedeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new sede and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::IdExists`] if `sede` already carries an
    /// id, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, sede))]
    pub async fn create_sede(&self, sede: Sede) -> Result<Sede, SedesError> {
        sede.ensure_new()?;
        let mut tx = self.repo.begin().await?;
        let created = tx.save(sede).await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Replace the sede stored under `id` with `sede`.
    ///
    /// # Errors
    ///
    /// Returns [`SedesError::InvalidRequest`] when the body id is missing,
    /// differs from `id`, or no record exists under `id`, or a storage error
    /// from the repository.
    #[tracing::instrument(skip(self, sede))]
    pub async fn update_sede(&self, id: SedeId, sede: Sede) -> Result<Sede, SedesError> {
        sede.ensure_targets(id)?;
        let mut tx = self.repo.begin().await?;
        if !tx.exists_by_id(id).await? {
            return Err(InvalidRequestError::IdNotFound.into());
        }
        let updated = tx.save(sede).await?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Merge the non-null fields of `patch` into the sede stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SedesError::InvalidRequest`] on the same id checks as
    /// [`update_sede`](Self::update_sede), [`SedesError::NotFound`] if the
    /// record disappears between the existence check and the load, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn partial_update_sede(&self, id: SedeId, patch: Sede) -> Result<Sede, SedesError> {
        let id = patch.ensure_targets(id)?;
        let mut tx = self.repo.begin().await?;
        if !tx.exists_by_id(id).await? {
            return Err(InvalidRequestError::IdNotFound.into());
        }
        let Some(mut existing) = tx.find_by_id(id).await? else {
            return Err(not_found(id));
        };
        existing.merge(patch);
        let merged = tx.save(existing).await?;
        tx.commit().await?;
        Ok(merged)
    }

    /// List all sedes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sedes(&self) -> Result<Vec<Sede>, SedesError> {
        let mut tx = self.repo.begin().await?;
        let all = tx.find_all().await?;
        tx.commit().await?;
        Ok(all)
    }

    /// Look up a sede by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SedesError::NotFound`] when no sede with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_sede(&self, id: SedeId) -> Result<Sede, SedesError> {
        let mut tx = self.repo.begin().await?;
        let found = tx.find_by_id(id).await?;
        tx.commit().await?;
        found.ok_or_else(|| not_found(id))
    }

    /// Delete a sede by id. Deleting a missing sede succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_sede(&self, id: SedeId) -> Result<(), SedesError> {
        let mut tx = self.repo.begin().await?;
        tx.delete_by_id(id).await?;
        tx.commit().await
    }
}

fn not_found(id: SedeId) -> SedesError {
    NotFoundError {
        entity: ENTITY_NAME,
        id: id.to_string(),
    }
    .into()
}
