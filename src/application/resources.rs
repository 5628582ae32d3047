//! Supported API resources
//!
//! Dispatch is an explicit enum with an endpoint lookup table; there is no
//! by-name routing to arbitrary endpoints.

use crate::error::AppError;
use crate::transport::pagination::PageSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expense API resource kinds this client knows how to address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Expense reports
    Reports,
    /// Expense entries
    Entries,
    /// Expense entry attendees
    Attendees,
    /// Expense entry allocations
    Allocations,
    /// Receipt images
    ReceiptImages,
    /// Company users
    Users,
}

impl Resource {
    /// Returns the collection endpoint for this resource
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            Resource::Reports => "api/v3.0/expense/reports",
            Resource::Entries => "api/v3.0/expense/entries",
            Resource::Attendees => "api/v3.0/expense/attendees",
            Resource::Allocations => "api/v3.0/expense/allocations",
            Resource::ReceiptImages => "api/v3.0/expense/receiptimages",
            Resource::Users => "api/v3.0/common/users",
        }
    }

    /// Returns the endpoint for a single item of this resource
    #[must_use]
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint(), id)
    }

    /// Returns the pagination key schema for this resource
    ///
    /// All v3 list endpoints share the `Items`/`NextPage` contract.
    #[must_use]
    pub fn schema(&self) -> PageSchema {
        PageSchema::default()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Reports => "reports",
            Resource::Entries => "entries",
            Resource::Attendees => "attendees",
            Resource::Allocations => "allocations",
            Resource::ReceiptImages => "receiptimages",
            Resource::Users => "users",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reports" => Ok(Resource::Reports),
            "entries" => Ok(Resource::Entries),
            "attendees" => Ok(Resource::Attendees),
            "allocations" => Ok(Resource::Allocations),
            "receiptimages" => Ok(Resource::ReceiptImages),
            "users" => Ok(Resource::Users),
            other => Err(AppError::InvalidInput(format!(
                "unknown resource kind: {other}"
            ))),
        }
    }
}
