use thiserror::Error;

/// Failures surfaced by catalog operations.
///
/// The display text of each variant is the exact message the HTTP layer puts
/// in its error body, so these strings are part of the public contract.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product name and price are required")]
    MissingRequiredFields,

    #[error("price must be a number")]
    InvalidPrice,

    #[error("product not found")]
    NotFound,
}

impl CatalogError {
    /// True for the one variant that maps to HTTP 404 rather than 400.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}
