//! A module containing the [`SortDirection`] enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction of a sort criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order. This is the direction used when the client doesn't
    /// provide one.
    #[default]
    #[serde(alias = "asc")]
    Asc,
    /// Descending order.
    #[serde(alias = "desc")]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("ASC"),
            SortDirection::Desc => f.write_str("DESC"),
        }
    }
}
