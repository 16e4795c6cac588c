/*
 * head.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The concrete document-head sink.

use std::io::{self, Write};

use indexmap::IndexMap;

use crate::sink::{MetaAttr, PresentationSink};

/// An in-memory document head: title, meta tags, link tags, and the style
/// variables consumed by rendered markup.
///
/// Tags are keyed by their identifying attribute, so upserts are
/// find-or-create by construction. Writes are diffed; [`mutations`] counts
/// only the writes that changed something, which makes synchronizer
/// idempotence observable in tests.
///
/// [`mutations`]: DocumentHead::mutations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentHead {
    title: String,
    style_vars: IndexMap<String, String>,
    metas: IndexMap<(MetaAttr, String), String>,
    links: IndexMap<String, String>,
    mutations: usize,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes that actually changed state.
    pub fn mutations(&self) -> usize {
        self.mutations
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    pub fn meta(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.metas
            .get(&(attr, key.to_string()))
            .map(String::as_str)
    }

    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }

    /// Number of meta tags whose identifying key is `(attr, key)`.
    ///
    /// By construction this is 0 or 1; exposed so tests can assert the
    /// no-duplicates guarantee directly.
    pub fn meta_count(&self, attr: MetaAttr, key: &str) -> usize {
        usize::from(self.metas.contains_key(&(attr, key.to_string())))
    }

    /// Serialize the head as HTML: title, meta tags, links, and a
    /// `:root { ... }` style block carrying the style variables.
    pub fn write_html<W: Write>(&self, buf: &mut W) -> io::Result<()> {
        writeln!(buf, "<title>{}</title>", escape_attr(&self.title))?;

        for ((attr, key), content) in &self.metas {
            writeln!(
                buf,
                "<meta {}=\"{}\" content=\"{}\" />",
                attr.attr(),
                escape_attr(key),
                escape_attr(content)
            )?;
        }

        for (rel, href) in &self.links {
            writeln!(
                buf,
                "<link rel=\"{}\" href=\"{}\" />",
                escape_attr(rel),
                escape_attr(href)
            )?;
        }

        if !self.style_vars.is_empty() {
            writeln!(buf, "<style>")?;
            writeln!(buf, ":root {{")?;
            for (name, value) in &self.style_vars {
                writeln!(buf, "  {}: {};", name, value)?;
            }
            writeln!(buf, "}}")?;
            writeln!(buf, "</style>")?;
        }

        Ok(())
    }
}

impl PresentationSink for DocumentHead {
    fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.title = title.to_string();
            self.mutations += 1;
        }
    }

    fn set_style_var(&mut self, name: &str, value: &str) {
        if self.style_vars.get(name).map(String::as_str) != Some(value) {
            self.style_vars.insert(name.to_string(), value.to_string());
            self.mutations += 1;
        }
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) {
        let id = (attr, key.to_string());
        if self.metas.get(&id).map(String::as_str) != Some(content) {
            self.metas.insert(id, content.to_string());
            self.mutations += 1;
        }
    }

    fn upsert_link(&mut self, rel: &str, href: &str) {
        if self.links.get(rel).map(String::as_str) != Some(href) {
            self.links.insert(rel.to_string(), href.to_string());
            self.mutations += 1;
        }
    }
}

/// Escape a string for use inside a double-quoted HTML attribute.
fn escape_attr(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upsert_meta_overwrites_in_place() {
        let mut head = DocumentHead::new();
        head.upsert_meta(MetaAttr::Name, "description", "first");
        head.upsert_meta(MetaAttr::Name, "description", "second");

        assert_eq!(head.meta_count(MetaAttr::Name, "description"), 1);
        assert_eq!(head.meta(MetaAttr::Name, "description"), Some("second"));
    }

    #[test]
    fn test_name_and_property_are_distinct_identities() {
        let mut head = DocumentHead::new();
        head.upsert_meta(MetaAttr::Name, "og:title", "by-name");
        head.upsert_meta(MetaAttr::Property, "og:title", "by-property");

        assert_eq!(head.meta(MetaAttr::Name, "og:title"), Some("by-name"));
        assert_eq!(head.meta(MetaAttr::Property, "og:title"), Some("by-property"));
    }

    #[test]
    fn test_identical_writes_do_not_mutate() {
        let mut head = DocumentHead::new();
        head.set_title("Shop");
        head.set_style_var("--theme-primary", "#111");
        head.upsert_link("icon", "/favicon.ico");
        let after_first = head.mutations();

        head.set_title("Shop");
        head.set_style_var("--theme-primary", "#111");
        head.upsert_link("icon", "/favicon.ico");
        assert_eq!(head.mutations(), after_first);
    }

    #[test]
    fn test_write_html_escapes_and_orders() {
        let mut head = DocumentHead::new();
        head.set_title("Tom & Co");
        head.upsert_meta(MetaAttr::Name, "description", "a \"quoted\" shop");
        head.upsert_link("icon", "/favicon.ico");
        head.set_style_var("--theme-primary", "#667eea");

        let mut buf = Vec::new();
        head.write_html(&mut buf).unwrap();
        let html = String::from_utf8(buf).unwrap();

        assert_eq!(
            html,
            "<title>Tom &amp; Co</title>\n\
             <meta name=\"description\" content=\"a &quot;quoted&quot; shop\" />\n\
             <link rel=\"icon\" href=\"/favicon.ico\" />\n\
             <style>\n\
             :root {\n  --theme-primary: #667eea;\n}\n\
             </style>\n"
        );
    }
}
