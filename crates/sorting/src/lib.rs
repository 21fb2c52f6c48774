//! Sorting layer of the listing endpoints.
//!
//! This crate owns the allow-lists of sortable fields for each listed
//! resource, and validates the sort criteria sent by clients against them.
//! The validated criteria are then handed to the query-building layer, which
//! is not part of this crate.

#![warn(missing_docs)]

pub mod direction;
pub mod error;
pub mod fields;
pub mod registry;
pub mod sort;

pub use direction::SortDirection;
pub use registry::{SortingRegistry, init_registry, registry};
pub use sort::SortField;
