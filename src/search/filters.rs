use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Status value a fresh filter set starts with; only deviations from it are
/// sent to the service.
pub const DEFAULT_STATUS: &str = "available";

/// Structured search constraints applied to a property listing query.
///
/// Serialized field names match the service's query parameters, so a stored
/// snapshot reads the same as the request it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    pub city: String,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: String,
    pub bathrooms: String,
    pub property_type: String,
    pub amenities: Vec<String>,
    pub status: String,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            city: String::new(),
            min_price: None,
            max_price: None,
            bedrooms: String::new(),
            bathrooms: String::new(),
            property_type: String::new(),
            amenities: Vec::new(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl FilterSet {
    /// True when every field still holds its default, i.e. the set would
    /// contribute nothing to a query.
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// Scalar fields addressable through [`FilterState::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    City,
    MinPrice,
    MaxPrice,
    Bedrooms,
    Bathrooms,
    PropertyType,
    Status,
}

impl FilterField {
    pub fn name(self) -> &'static str {
        match self {
            FilterField::City => "city",
            FilterField::MinPrice => "minPrice",
            FilterField::MaxPrice => "maxPrice",
            FilterField::Bedrooms => "bedrooms",
            FilterField::Bathrooms => "bathrooms",
            FilterField::PropertyType => "propertyType",
            FilterField::Status => "status",
        }
    }
}

/// Owns the mutable filter set for one search view.
///
/// All operations are synchronous and touch nothing beyond the owned state;
/// the orchestrator borrows the set when a search runs.
#[derive(Debug, Default)]
pub struct FilterState {
    filters: FilterSet,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Replaces one scalar field. An empty value clears the field; price
    /// fields must parse as non-negative integers.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), SearchError> {
        let value = value.trim();
        match field {
            FilterField::City => self.filters.city = value.to_string(),
            FilterField::Bedrooms => self.filters.bedrooms = value.to_string(),
            FilterField::Bathrooms => self.filters.bathrooms = value.to_string(),
            FilterField::PropertyType => self.filters.property_type = value.to_string(),
            FilterField::Status => {
                self.filters.status = if value.is_empty() {
                    DEFAULT_STATUS.to_string()
                } else {
                    value.to_string()
                };
            }
            FilterField::MinPrice => self.filters.min_price = parse_price(field, value)?,
            FilterField::MaxPrice => self.filters.max_price = parse_price(field, value)?,
        }
        Ok(())
    }

    /// Adds the amenity if absent, removes it if present.
    pub fn toggle_amenity(&mut self, name: &str) {
        if let Some(pos) = self.filters.amenities.iter().position(|a| a == name) {
            self.filters.amenities.remove(pos);
        } else {
            self.filters.amenities.push(name.to_string());
        }
    }

    /// Resets every field to its default.
    pub fn clear(&mut self) {
        self.filters = FilterSet::default();
    }
}

fn parse_price(field: FilterField, value: &str) -> Result<Option<u64>, SearchError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u64>()
        .map(Some)
        .map_err(|_| SearchError::InvalidFilter {
            field: field.name(),
            value: value.to_string(),
        })
}
