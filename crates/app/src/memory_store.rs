//! In-process sede store backed by a `BTreeMap`.
//!
//! A transaction holds the store's mutex for its whole lifetime. Reads go
//! to the shared records, writes are kept in a pending map that
//! [`commit`](SedeTransaction::commit) applies and a drop discards.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use sedes_domain::error::SedesError;
use sedes_domain::id::SedeId;
use sedes_domain::sede::Sede;

use crate::ports::{SedeRepository, SedeTransaction};

#[derive(Debug, Default)]
struct Records {
    rows: BTreeMap<SedeId, Sede>,
    last_id: i64,
}

/// Shared handle to an in-memory store. Clones see the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySedeRepository {
    records: Arc<Mutex<Records>>,
}

impl InMemorySedeRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SedeRepository for InMemorySedeRepository {
    type Transaction = InMemoryTransaction;

    fn begin(&self) -> impl Future<Output = Result<InMemoryTransaction, SedesError>> + Send {
        let records = Arc::clone(&self.records);
        async move {
            let guard = records.lock_owned().await;
            let last_id = guard.last_id;
            Ok(InMemoryTransaction {
                guard,
                pending: BTreeMap::new(),
                last_id,
            })
        }
    }
}

/// Exclusive scope over an [`InMemorySedeRepository`].
#[derive(Debug)]
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<Records>,
    /// `Some` replaces the record under the id, `None` removes it.
    pending: BTreeMap<SedeId, Option<Sede>>,
    last_id: i64,
}

impl InMemoryTransaction {
    fn lookup(&self, id: SedeId) -> Option<&Sede> {
        match self.pending.get(&id) {
            Some(change) => change.as_ref(),
            None => self.guard.rows.get(&id),
        }
    }
}

impl SedeTransaction for InMemoryTransaction {
    fn save(&mut self, mut sede: Sede) -> impl Future<Output = Result<Sede, SedesError>> + Send {
        let id = match sede.id {
            Some(id) => {
                self.last_id = self.last_id.max(id.get());
                id
            }
            None => {
                self.last_id += 1;
                SedeId::new(self.last_id)
            }
        };
        sede.id = Some(id);
        self.pending.insert(id, Some(sede.clone()));
        async { Ok(sede) }
    }

    fn exists_by_id(
        &mut self,
        id: SedeId,
    ) -> impl Future<Output = Result<bool, SedesError>> + Send {
        let found = self.lookup(id).is_some();
        async move { Ok(found) }
    }

    fn find_by_id(
        &mut self,
        id: SedeId,
    ) -> impl Future<Output = Result<Option<Sede>, SedesError>> + Send {
        let found = self.lookup(id).cloned();
        async { Ok(found) }
    }

    fn find_all(&mut self) -> impl Future<Output = Result<Vec<Sede>, SedesError>> + Send {
        let mut visible: BTreeMap<SedeId, &Sede> =
            self.guard.rows.iter().map(|(id, sede)| (*id, sede)).collect();
        for (id, change) in &self.pending {
            match change {
                Some(sede) => visible.insert(*id, sede),
                None => visible.remove(id),
            };
        }
        let all: Vec<Sede> = visible.into_values().cloned().collect();
        async { Ok(all) }
    }

    fn delete_by_id(&mut self, id: SedeId) -> impl Future<Output = Result<(), SedesError>> + Send {
        self.pending.insert(id, None);
        async { Ok(()) }
    }

    fn commit(self) -> impl Future<Output = Result<(), SedesError>> + Send {
        let Self {
            mut guard,
            pending,
            last_id,
        } = self;
        for (id, change) in pending {
            match change {
                Some(sede) => guard.rows.insert(id, sede),
                None => guard.rows.remove(&id),
            };
        }
        guard.last_id = last_id;
        async { Ok(()) }
    }
}
