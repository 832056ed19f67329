//! Sede — a campus site or branch, identified by the store.

use serde::{Deserialize, Serialize};

use crate::error::InvalidRequestError;
use crate::id::SedeId;

/// A site with a name and an address.
///
/// The same shape is used for full replacements and for merge patches: in a
/// patch, a `None` field means "leave the stored value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sede {
    #[serde(default)]
    pub id: Option<SedeId>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

impl Sede {
    /// Create a builder for constructing a [`Sede`].
    #[must_use]
    pub fn builder() -> SedeBuilder {
        SedeBuilder::default()
    }

    /// Check that this record has not been assigned an identity yet.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::IdExists`] when `id` is set.
    pub fn ensure_new(&self) -> Result<(), InvalidRequestError> {
        if self.id.is_some() {
            return Err(InvalidRequestError::IdExists);
        }
        Ok(())
    }

    /// Check that this record addresses `target`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::IdNull`] when `id` is unset and
    /// [`InvalidRequestError::IdInvalid`] when it differs from `target`.
    pub fn ensure_targets(&self, target: SedeId) -> Result<SedeId, InvalidRequestError> {
        match self.id {
            None => Err(InvalidRequestError::IdNull),
            Some(id) if id != target => Err(InvalidRequestError::IdInvalid),
            Some(id) => Ok(id),
        }
    }

    /// Overwrite the fields that `patch` carries, keeping the others.
    ///
    /// The identifier is never touched.
    pub fn merge(&mut self, patch: Sede) {
        if let Some(nombre) = patch.nombre {
            self.nombre = Some(nombre);
        }
        if let Some(direccion) = patch.direccion {
            self.direccion = Some(direccion);
        }
    }
}

/// Step-by-step builder for [`Sede`].
#[derive(Debug, Default)]
pub struct SedeBuilder {
    id: Option<SedeId>,
    nombre: Option<String>,
    direccion: Option<String>,
}

impl SedeBuilder {
    #[must_use]
    pub fn id(mut self, id: SedeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    #[must_use]
    pub fn direccion(mut self, direccion: impl Into<String>) -> Self {
        self.direccion = Some(direccion.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Sede {
        Sede {
            id: self.id,
            nombre: self.nombre,
            direccion: self.direccion,
        }
    }
}
