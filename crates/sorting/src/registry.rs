//! The registry of the sortable-field allow-lists.
//!
//! Each listed resource is registered under a tag (e.g. `"projects"`) with
//! the ordered list of fields clients may sort it by. The registry is built
//! once at startup and never mutated afterwards.

use std::{collections::HashMap, sync::OnceLock};

use crate::{error::SortingError, fields, sort::SortField};

/// The fields the projects listing may be sorted by, in the order they are
/// advertised to clients.
pub const PROJECTS_SORTABLE_FIELDS: &[&str] = &[
    fields::ID,
    fields::NAME,
    fields::LAST_UPDATED_AT,
    fields::CREATED_AT,
    fields::LAST_UPDATED_TRACE_AT,
    fields::DURATION_AGG,
    fields::TOTAL_ESTIMATED_COST_SUM,
];

/// An immutable mapping from a resource tag to its sortable-field allow-list.
#[derive(Debug, Default)]
pub struct SortingRegistry {
    allow_lists: HashMap<&'static str, &'static [&'static str]>,
}

impl SortingRegistry {
    /// Returns an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the allow-list of a resource, replacing any previous one
    /// bound to the same tag.
    pub fn resource(mut self, tag: &'static str, allow_list: &'static [&'static str]) -> Self {
        self.allow_lists.insert(tag, allow_list);
        self
    }

    /// Returns the ordered allow-list of the resource, or `None` if the tag
    /// isn't registered.
    ///
    /// This list is what listing endpoints expose as `sortable_by` in their
    /// page payloads.
    pub fn sortable_fields(&self, resource: &str) -> Option<&'static [&'static str]> {
        self.allow_lists.get(resource).copied()
    }

    /// Validates the sort criteria requested for a resource.
    ///
    /// The criteria come back unchanged, in the order the client sent them,
    /// once every field is checked against the allow-list. A field outside
    /// the allow-list or requested twice makes the whole request invalid.
    pub fn validate(
        &self,
        resource: &str,
        sorting: Vec<SortField>,
    ) -> Result<Vec<SortField>, SortingError> {
        let allow_list = self
            .sortable_fields(resource)
            .ok_or_else(|| SortingError::UnknownResource(resource.to_owned()))?;

        let mut seen = Vec::with_capacity(sorting.len());
        for sort in &sorting {
            if !allow_list.contains(&sort.field.as_str()) {
                tracing::debug!(resource, field = %sort.field, "rejected sorting field");
                return Err(SortingError::UnsupportedField(sort.field.clone()));
            }
            if seen.contains(&sort.field.as_str()) {
                tracing::debug!(resource, field = %sort.field, "duplicate sorting field");
                return Err(SortingError::DuplicateField(sort.field.clone()));
            }
            seen.push(sort.field.as_str());
        }

        Ok(sorting)
    }

    /// Decodes then validates the raw `sorting` query parameter of a listing
    /// request.
    ///
    /// The parameter is expected to be a JSON array of criteria, already
    /// percent-decoded by the HTTP layer. An empty parameter means no
    /// sorting.
    pub fn validate_query(
        &self,
        resource: &str,
        raw: &str,
    ) -> Result<Vec<SortField>, SortingError> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let sorting = serde_json::from_str(raw)?;
        self.validate(resource, sorting)
    }
}

/// Returns the default registry, with the allow-list of every resource
/// served by the API.
fn default_registry() -> SortingRegistry {
    SortingRegistry::new().resource("projects", PROJECTS_SORTABLE_FIELDS)
}

static REGISTRY: OnceLock<SortingRegistry> = OnceLock::new();

/// Sets the process-wide registry.
///
/// Returns the provided registry back if one was already set.
pub fn init_registry(registry: SortingRegistry) -> Result<(), SortingRegistry> {
    REGISTRY.set(registry)
}

/// Returns the process-wide registry, initializing it with the default
/// allow-lists if [`init_registry`] wasn't called.
pub fn registry() -> &'static SortingRegistry {
    REGISTRY.get_or_init(default_registry)
}
