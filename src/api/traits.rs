use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{ContactRequest, Property};

/// Client seam over the rental service's REST endpoints.
/// Production uses [`crate::api::RestListingApi`]; tests substitute a
/// recording mock.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// `GET /properties` with the given query pairs (empty slice for the
    /// unfiltered listing).
    async fn list_properties(
        &self,
        query: &[(&'static str, String)],
    ) -> Result<Vec<Property>, ApiError>;

    /// `GET /contact-requests`.
    async fn contact_requests(&self) -> Result<Vec<ContactRequest>, ApiError>;

    /// `PUT /contact-requests/{id}/status`.
    async fn update_contact_request_status(&self, id: i64, status: &str) -> Result<(), ApiError>;
}
