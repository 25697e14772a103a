//! Organization domain model
//!
//! An organization (the records service calls it a company) owns zero or more
//! documents. Organizations are fetched once per run and are never modified.

use super::ids::OrganizationId;
use serde::{Deserialize, Serialize};

/// A document-owning unit in the records service
///
/// # Examples
///
/// ```
/// use casefile::domain::Organization;
///
/// let org = Organization::new(1, "Acme Corp");
/// assert_eq!(org.id.get(), 1);
/// assert_eq!(org.name, "Acme Corp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for this organization
    pub id: OrganizationId,

    /// Display name, as returned by the service (unsanitized)
    pub name: String,
}

impl Organization {
    /// Creates a new organization
    pub fn new(id: impl Into<OrganizationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
