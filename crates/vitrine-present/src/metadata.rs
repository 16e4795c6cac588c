/*
 * metadata.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Metadata synchronizer: SEO config → document head tags.

use vitrine_config::SeoConfig;
use vitrine_page_types::Page;

use crate::sink::{MetaAttr, PresentationSink};

/// Document title used when no SEO title is configured.
pub const DEFAULT_TITLE: &str = "My Store";

/// Synchronize site-wide SEO defaults into the document head.
///
/// Every tag uses find-or-create semantics keyed by its identifying
/// attribute, so running this any number of times leaves at most one tag
/// per identity. Absent or empty fields are skipped entirely; they neither
/// create nor clear tags.
pub fn apply_seo(seo: &SeoConfig, sink: &mut dyn PresentationSink) {
    sink.set_title(nonempty(&seo.title).unwrap_or(DEFAULT_TITLE));

    if let Some(description) = nonempty(&seo.description) {
        sink.upsert_meta(MetaAttr::Name, "description", description);
        sink.upsert_meta(MetaAttr::Property, "og:description", description);
    }
    if let Some(keywords) = nonempty(&seo.keywords) {
        sink.upsert_meta(MetaAttr::Name, "keywords", keywords);
    }
    if let Some(title) = nonempty(&seo.title) {
        sink.upsert_meta(MetaAttr::Property, "og:title", title);
    }
    if let Some(og_image) = nonempty(&seo.og_image) {
        sink.upsert_meta(MetaAttr::Property, "og:image", og_image);
    }
    if let Some(favicon) = nonempty(&seo.favicon) {
        sink.upsert_link("icon", favicon);
    }
}

/// Layer one page's metadata over the site-wide defaults.
///
/// Called after [`apply_seo`]; wherever the page provides a value it wins
/// (title, og:title, description, keywords, og:image), and wherever it does
/// not the site-wide value is left standing. Also emits the twitter card
/// tags the page path carries.
pub fn apply_page_meta(page: &Page, sink: &mut dyn PresentationSink) {
    let title = page.effective_meta_title();
    if !title.is_empty() {
        sink.set_title(title);
        sink.upsert_meta(MetaAttr::Property, "og:title", title);
    }

    if !page.meta_description.is_empty() {
        sink.upsert_meta(MetaAttr::Name, "description", &page.meta_description);
        sink.upsert_meta(MetaAttr::Property, "og:description", &page.meta_description);
    }
    if !page.meta_keywords.is_empty() {
        sink.upsert_meta(MetaAttr::Name, "keywords", &page.meta_keywords);
    }
    if !page.og_image.is_empty() {
        sink.upsert_meta(MetaAttr::Property, "og:image", &page.og_image);
        sink.upsert_meta(MetaAttr::Name, "twitter:image", &page.og_image);
    }

    sink.upsert_meta(MetaAttr::Name, "twitter:card", "summary_large_image");
}

fn nonempty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::DocumentHead;
    use pretty_assertions::assert_eq;

    fn seo() -> SeoConfig {
        SeoConfig {
            title: Some("Atelier".into()),
            description: Some("Handmade goods".into()),
            keywords: Some("handmade, craft".into()),
            og_image: Some("https://cdn.example.com/og.png".into()),
            favicon: Some("/favicon.ico".into()),
        }
    }

    #[test]
    fn test_apply_twice_yields_single_tags() {
        let mut head = DocumentHead::new();
        apply_seo(&seo(), &mut head);
        apply_seo(&seo(), &mut head);

        assert_eq!(head.meta_count(MetaAttr::Name, "description"), 1);
        assert_eq!(head.meta_count(MetaAttr::Name, "keywords"), 1);
        assert_eq!(head.meta_count(MetaAttr::Property, "og:title"), 1);
        assert_eq!(head.meta_count(MetaAttr::Property, "og:description"), 1);
        assert_eq!(head.meta_count(MetaAttr::Property, "og:image"), 1);
        assert_eq!(head.meta(MetaAttr::Name, "description"), Some("Handmade goods"));
        assert_eq!(head.link("icon"), Some("/favicon.ico"));
    }

    #[test]
    fn test_reapply_is_idempotent() {
        let mut head = DocumentHead::new();
        apply_seo(&seo(), &mut head);
        let after_first = head.mutations();

        apply_seo(&seo(), &mut head);
        assert_eq!(head.mutations(), after_first);
    }

    #[test]
    fn test_title_fallback() {
        let mut head = DocumentHead::new();
        apply_seo(&SeoConfig::default(), &mut head);
        assert_eq!(head.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_absent_fields_create_no_tags() {
        let mut head = DocumentHead::new();
        apply_seo(&SeoConfig::default(), &mut head);

        assert_eq!(head.meta_count(MetaAttr::Name, "description"), 0);
        assert_eq!(head.meta_count(MetaAttr::Property, "og:image"), 0);
        assert!(head.link("icon").is_none());
    }

    #[test]
    fn test_page_overrides_win() {
        let mut head = DocumentHead::new();
        apply_seo(&seo(), &mut head);

        let page = Page {
            title: "Lookbook".into(),
            meta_title: "Lookbook | Atelier".into(),
            meta_description: "Our spring lookbook".into(),
            og_image: "https://cdn.example.com/lookbook.png".into(),
            ..Page::default()
        };
        apply_page_meta(&page, &mut head);

        assert_eq!(head.title(), "Lookbook | Atelier");
        assert_eq!(
            head.meta(MetaAttr::Property, "og:title"),
            Some("Lookbook | Atelier")
        );
        assert_eq!(
            head.meta(MetaAttr::Name, "description"),
            Some("Our spring lookbook")
        );
        assert_eq!(
            head.meta(MetaAttr::Property, "og:image"),
            Some("https://cdn.example.com/lookbook.png")
        );
        assert_eq!(
            head.meta(MetaAttr::Name, "twitter:image"),
            Some("https://cdn.example.com/lookbook.png")
        );
        assert_eq!(
            head.meta(MetaAttr::Name, "twitter:card"),
            Some("summary_large_image")
        );
    }

    #[test]
    fn test_empty_page_fields_leave_site_values() {
        let mut head = DocumentHead::new();
        apply_seo(&seo(), &mut head);

        let page = Page {
            title: "Contact".into(),
            ..Page::default()
        };
        apply_page_meta(&page, &mut head);

        // page title wins (falls back to page.title)
        assert_eq!(head.title(), "Contact");
        // but site-wide description/keywords/og:image survive
        assert_eq!(head.meta(MetaAttr::Name, "description"), Some("Handmade goods"));
        assert_eq!(head.meta(MetaAttr::Name, "keywords"), Some("handmade, craft"));
        assert_eq!(
            head.meta(MetaAttr::Property, "og:image"),
            Some("https://cdn.example.com/og.png")
        );
    }
}
