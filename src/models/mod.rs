use serde::{Deserialize, Serialize};

/// A property listing as returned by the rental service.
///
/// Read-only on this side; the service owns the data. Fields the service
/// omits for older listings decode as their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
}

/// A contact request left by a visitor, managed from the admin side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    pub status: String,
}

/// Envelope for `GET /properties`.
#[derive(Debug, Deserialize)]
pub struct PropertiesResponse {
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Envelope for `GET /contact-requests`.
#[derive(Debug, Deserialize)]
pub struct ContactRequestsResponse {
    #[serde(default)]
    pub contact_requests: Vec<ContactRequest>,
}
