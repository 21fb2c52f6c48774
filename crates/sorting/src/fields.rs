//! The identifiers of the fields that listing endpoints may sort by.
//!
//! These are wire-level names, shared between the allow-lists in
//! [`registry`](crate::registry) and the `sortable_by` entry of the page
//! payloads.

/// The unique ID of the entity.
pub const ID: &str = "id";
/// The display name of the entity.
pub const NAME: &str = "name";
/// The creation date of the entity.
pub const CREATED_AT: &str = "created_at";
/// The date of the last update of the entity itself.
pub const LAST_UPDATED_AT: &str = "last_updated_at";
/// The date of the last trace recorded for the entity.
pub const LAST_UPDATED_TRACE_AT: &str = "last_updated_trace_at";
/// The aggregated duration of the traces of the entity.
pub const DURATION_AGG: &str = "duration_agg";
/// The summed estimated cost of the traces of the entity.
pub const TOTAL_ESTIMATED_COST_SUM: &str = "total_estimated_cost_sum";
