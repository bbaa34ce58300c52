//! Product model and its wire representation.

use serde::{Deserialize, Serialize};

/// A product as shown by the products list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Product as returned by the remote catalogue. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl ProductRecord {
    /// Converts to a [`Product`], filling missing fields with safe values.
    pub fn parse(self) -> Product {
        Product {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            price: self.price.filter(|p| p.is_finite() && *p >= 0.0).unwrap_or(0.0),
            rating: self.rating,
        }
    }
}
