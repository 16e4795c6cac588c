/*
 * product.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Product catalog types referenced by the products section.
//!
//! The catalog itself lives behind the data layer; these types only describe
//! what crosses that boundary.

use serde::{Deserialize, Serialize};

/// A catalog product, as returned by the data layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub category_id: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub is_new: bool,
    pub stock: u32,
}

impl Product {
    /// First catalog image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Filter parameters for a product fetch.
///
/// Mirrors the data layer's `getProducts(filter)` operation: featured-only,
/// optional category, optional result limit. All fields optional; an empty
/// query means "everything".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}
