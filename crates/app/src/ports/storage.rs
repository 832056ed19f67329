//! Storage port — transaction-scoped persistence for sedes.
//!
//! A use-case opens one [`SedeTransaction`] through [`SedeRepository::begin`],
//! issues its calls against it, and commits. Dropping an uncommitted
//! transaction rolls it back and releases whatever the store holds for it.

use std::future::Future;

use sedes_domain::error::SedesError;
use sedes_domain::id::SedeId;
use sedes_domain::sede::Sede;

/// Entry point of the store: hands out transaction scopes.
pub trait SedeRepository {
    /// Scope type handed out by [`begin`](Self::begin).
    type Transaction: SedeTransaction;

    /// Open a new transaction scope.
    fn begin(&self) -> impl Future<Output = Result<Self::Transaction, SedesError>> + Send;
}

/// Store operations available inside one transaction scope.
pub trait SedeTransaction: Send + Sized {
    /// Insert `sede` when it has no id (the store assigns one), otherwise
    /// insert-or-replace the record under its id. Returns the stored record.
    fn save(&mut self, sede: Sede) -> impl Future<Output = Result<Sede, SedesError>> + Send;

    /// Whether a record exists under `id`.
    fn exists_by_id(&mut self, id: SedeId)
    -> impl Future<Output = Result<bool, SedesError>> + Send;

    /// Get a record by its identifier.
    fn find_by_id(
        &mut self,
        id: SedeId,
    ) -> impl Future<Output = Result<Option<Sede>, SedesError>> + Send;

    /// Get every record, ordered by ascending id.
    fn find_all(&mut self) -> impl Future<Output = Result<Vec<Sede>, SedesError>> + Send;

    /// Remove the record under `id`. Removing a missing record is not an error.
    fn delete_by_id(&mut self, id: SedeId) -> impl Future<Output = Result<(), SedesError>> + Send;

    /// Make the changes of this scope durable and release it.
    fn commit(self) -> impl Future<Output = Result<(), SedesError>> + Send;
}
