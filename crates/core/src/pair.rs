//! The `IdNamePair` record and the trait the list helpers are generic over.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that carries an id and a display name.
///
/// The list helpers in [`crate::lists`] work over any `T: IdNamed`, so richer record types can
/// reuse them by exposing their id and name.
pub trait IdNamed {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl<T: IdNamed + ?Sized> IdNamed for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A plain id/name record.
///
/// No uniqueness is enforced here. Ids are only de-duplicated when a caller asks for it via
/// [`crate::IdNamePairVec`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdNamePair {
    pub id: String,
    pub name: String,
}

impl IdNamePair {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl IdNamed for IdNamePair {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IdNamePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
