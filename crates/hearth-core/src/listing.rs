//! The property listing entity
//!
//! A trimmed view of the backend listing record. The deep-link core only
//! prefetches it and hands it to navigation so the detail screen does not
//! need to re-fetch; field-level rendering belongs to the UI layer.

use serde::{Deserialize, Serialize};

/// A property listing as returned by the backend data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    /// Backend record id
    pub id: String,
    /// Listing headline
    pub title: String,
    /// Asking price in minor currency units, if published
    pub price: Option<u64>,
    /// City the property is in
    pub city: Option<String>,
    /// Cover image URL
    pub cover_url: Option<String>,
}

impl PropertyListing {
    /// Create a listing with just the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: None,
            city: None,
            cover_url: None,
        }
    }
}
