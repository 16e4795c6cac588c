/*
 * store.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! File-backed data layer.
//!
//! Hosts the data-layer collaborator interface over a plain site directory:
//!
//! ```text
//! site/
//!   settings.json    array of { key, value } records
//!   products.json    product catalog array
//!   pages/*.json     one page document per file
//! ```
//!
//! Missing catalog or settings files are treated as empty, not as errors;
//! the rendering pipeline fills in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use vitrine_config::SettingRecord;
use vitrine_core::{DataError, ProductSource, SiteData};
use vitrine_page_types::{Page, Product, ProductQuery};

/// A site directory acting as the data layer.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, DataError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(DataError::backend(format!(
                "site directory does not exist: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// The directory holding page documents.
    pub fn pages_dir(&self) -> PathBuf {
        self.root.join("pages")
    }

    fn read_json_or_default<T: Default + serde::de::DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<T, DataError> {
        let path = self.root.join(name);
        if !path.exists() {
            tracing::debug!(file = %path.display(), "site file missing, treating as empty");
            return Ok(T::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl ProductSource for FileStore {
    fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, DataError> {
        let catalog: Vec<Product> = self.read_json_or_default("products.json")?;
        let mut matched: Vec<Product> = catalog
            .into_iter()
            .filter(|p| query.featured.is_none_or(|featured| p.featured == featured))
            .filter(|p| {
                query
                    .category
                    .as_ref()
                    .is_none_or(|category| p.category_id.as_ref() == Some(category))
            })
            .collect();
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }
}

impl SiteData for FileStore {
    fn all_settings(&self) -> Result<Vec<SettingRecord>, DataError> {
        self.read_json_or_default("settings.json")
    }

    fn page(&self, slug: &str) -> Result<Option<Page>, DataError> {
        let path = self.pages_dir().join(format!("{slug}.json"));
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

/// Parse one page document from disk.
pub fn read_page(path: &Path) -> Result<Page, DataError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("settings.json"),
            r#"[{"key": "store", "value": "{\"name\": \"Atelier\"}"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("products.json"),
            r#"[
                {"id": "p1", "name": "One", "slug": "one", "price": 10, "featured": true},
                {"id": "p2", "name": "Two", "slug": "two", "price": 20,
                 "category_id": "bags"},
                {"id": "p3", "name": "Three", "slug": "three", "price": 30, "featured": true}
            ]"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        fs::write(
            dir.path().join("pages/home.json"),
            r#"{"slug": "home", "title": "Home", "status": "published", "sections": []}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_open_requires_directory() {
        assert!(FileStore::open("/nonexistent/site/dir").is_err());
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = site();
        let store = FileStore::open(dir.path()).unwrap();
        let records = store.all_settings().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "store");
    }

    #[test]
    fn test_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.all_settings().unwrap().is_empty());
        assert!(store.products(&ProductQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_product_filtering() {
        let dir = site();
        let store = FileStore::open(dir.path()).unwrap();

        let featured = store
            .products(&ProductQuery {
                featured: Some(true),
                ..ProductQuery::default()
            })
            .unwrap();
        assert_eq!(featured.len(), 2);

        let bags = store
            .products(&ProductQuery {
                category: Some("bags".into()),
                ..ProductQuery::default()
            })
            .unwrap();
        assert_eq!(bags.len(), 1);
        assert_eq!(bags[0].slug, "two");

        let limited = store
            .products(&ProductQuery {
                limit: Some(1),
                ..ProductQuery::default()
            })
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_page_lookup_by_slug() {
        let dir = site();
        let store = FileStore::open(dir.path()).unwrap();

        let page = store.page("home").unwrap().unwrap();
        assert_eq!(page.title, "Home");

        assert!(store.page("missing").unwrap().is_none());
    }
}
