/*
 * page.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Page documents: an ordered section list plus page-level metadata.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Publication state. Only published pages are externally visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

/// Authoring template a page was created from.
///
/// Carried through from the page store; drives no rendering behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTemplate {
    Home,
    About,
    Contact,
    #[default]
    Custom,
}

/// A storefront page: slug-addressed, with per-page SEO overrides and an
/// ordered list of content sections.
///
/// Every field tolerates absence in the serialized form; a page that is
/// missing its status deserializes as a draft, which keeps it invisible.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub template: PageTemplate,
    pub status: PageStatus,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_image: String,
    pub sections: Vec<Section>,
    pub created_at: String,
    pub updated_at: String,
}

impl Page {
    /// Whether this page may be shown to the public.
    pub fn is_published(&self) -> bool {
        self.status == PageStatus::Published
    }

    /// The title to use for document metadata: the explicit meta title when
    /// present, otherwise the page title.
    pub fn effective_meta_title(&self) -> &str {
        if self.meta_title.is_empty() {
            &self.title
        } else {
            &self.meta_title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_status_is_draft() {
        let page: Page = serde_json::from_value(json!({
            "slug": "landing",
            "title": "Landing",
            "sections": []
        }))
        .unwrap();

        assert_eq!(page.status, PageStatus::Draft);
        assert!(!page.is_published());
    }

    #[test]
    fn test_effective_meta_title_fallback() {
        let mut page = Page {
            title: "About Us".into(),
            ..Page::default()
        };
        assert_eq!(page.effective_meta_title(), "About Us");

        page.meta_title = "About | My Store".into();
        assert_eq!(page.effective_meta_title(), "About | My Store");
    }

    #[test]
    fn test_page_with_bad_section_still_parses() {
        let page: Page = serde_json::from_value(json!({
            "slug": "home",
            "status": "published",
            "sections": [
                { "type": "hero", "id": "h" },
                { "type": "widget", "id": "w" }
            ]
        }))
        .unwrap();

        assert!(page.is_published());
        assert_eq!(page.sections.len(), 2);
    }
}
