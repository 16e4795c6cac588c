/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Data-layer collaborator traits.
//!
//! The network/storage client is out of scope for this core; these traits
//! are its interface. Implementations decide caching and retry policy.

use vitrine_config::SettingRecord;
use vitrine_page_types::{Page, Product, ProductQuery};

use crate::error::DataError;

/// Source of catalog products for the products section.
pub trait ProductSource {
    /// Fetch products matching the query, honoring featured/category/limit.
    fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, DataError>;
}

/// The full data layer: configuration records, pages, and products.
pub trait SiteData: ProductSource {
    /// All stored configuration records, in storage order.
    fn all_settings(&self) -> Result<Vec<SettingRecord>, DataError>;

    /// Fetch a page by slug. `Ok(None)` means the page does not exist,
    /// which is distinct from a fetch failure.
    fn page(&self, slug: &str) -> Result<Option<Page>, DataError>;
}
