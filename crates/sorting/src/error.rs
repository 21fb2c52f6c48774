//! A module containing the [`SortingError`] type, returned when a sort
//! request can't be validated.

/// Represents any error that could happen when validating a sort request.
#[derive(thiserror::Error, Debug)]
pub enum SortingError {
    /// The requested field is not in the allow-list of the resource.
    #[error("invalid sorting field `{0}`")]
    UnsupportedField(
        /// The identifier of the rejected field.
        String,
    ),
    /// The same field appears more than once in the request.
    #[error("duplicate sorting field `{0}`")]
    DuplicateField(
        /// The identifier of the repeated field.
        String,
    ),
    /// No allow-list is registered for the provided resource tag.
    #[error("no sortable fields registered for resource `{0}`")]
    UnknownResource(
        /// The resource tag.
        String,
    ),
    /// The `sorting` query parameter isn't a valid JSON array of criteria.
    #[error("invalid sorting query parameter: {0}")]
    Parse(#[from] serde_json::Error),
}
