/*
 * sink.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The presentation sink seam.

/// Which identifying attribute a meta tag is addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    /// `meta[name=...]`
    Name,
    /// `meta[property=...]`
    Property,
}

impl MetaAttr {
    /// The attribute name as written in HTML.
    pub fn attr(&self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// Singleton document presentation state, behind idempotent upserts.
///
/// Only the synchronizers mutate a sink; everything else reads derived
/// configuration. Implementations must guarantee at most one entry per
/// identifying attribute (find-or-create, never duplicate-insert) and
/// should diff before writing so that repeated application of unchanged
/// state causes no churn.
pub trait PresentationSink {
    /// Set the document title.
    fn set_title(&mut self, title: &str);

    /// Set one style variable, e.g. `--theme-primary`.
    fn set_style_var(&mut self, name: &str, value: &str);

    /// Find-or-create the meta tag identified by `(attr, key)` and set its
    /// content.
    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str);

    /// Find-or-create the link tag identified by `rel` and set its href.
    fn upsert_link(&mut self, rel: &str, href: &str);
}
