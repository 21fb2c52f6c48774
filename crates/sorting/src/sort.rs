//! A module containing the [`SortField`] struct, the unit of a sort request.

use serde::{Deserialize, Serialize};

use crate::direction::SortDirection;

/// A single sort criterion requested by a client.
///
/// Clients send an ordered sequence of these as a JSON array in the `sorting`
/// query parameter of a listing endpoint. The `direction` member may be
/// omitted on the wire, in which case it defaults to ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// The identifier of the field to sort by.
    pub field: String,
    /// The direction to sort in.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Returns a criterion sorting ascending on the provided field.
    pub fn asc<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Returns a criterion sorting descending on the provided field.
    pub fn desc<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}
