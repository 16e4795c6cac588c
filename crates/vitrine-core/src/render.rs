/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Document assembly: aggregated configuration + page view → full HTML.
//!
//! This is where the synchronizers meet the section writers. The head is
//! synchronized from site-wide configuration first and the page's own
//! metadata second, so per-page values win; the body comes from section
//! dispatch, or from a fixed placeholder for the terminal non-published
//! states.

use std::io::Write;

use vitrine_config::{ConfigState, SiteConfig};
use vitrine_page_types::Page;
use vitrine_present::{DocumentHead, apply_page_meta, apply_seo, apply_theme};

use crate::error::Result;
use crate::source::ProductSource;
use crate::view::PageView;
use crate::writer::{RenderContext, write_page_body};

/// Render a published page into a complete HTML document.
pub fn render_document(
    page: &Page,
    config: &SiteConfig,
    products: &dyn ProductSource,
) -> Result<String> {
    let mut head = DocumentHead::new();
    apply_theme(&config.theme, &mut head);
    apply_seo(&config.seo, &mut head);
    apply_page_meta(page, &mut head);

    let ctx = RenderContext::new(config, products);
    let mut body = Vec::new();
    write_page_body(&page.sections, &ctx, &mut body)?;

    assemble(&head, &body)
}

/// Render whatever the current page view calls for.
///
/// Returns `Ok(None)` while the page or the configuration is still
/// loading: the synchronizers are gated on "aggregation ready", never fed
/// defaults mid-fetch. The terminal placeholder states still get a fully
/// synchronized head so the 404 page carries the site theme.
pub fn render_view(
    view: &PageView,
    state: &ConfigState,
    products: &dyn ProductSource,
) -> Result<Option<String>> {
    let Some(config) = state.ready() else {
        return Ok(None);
    };

    match view {
        PageView::Loading => Ok(None),
        PageView::NotFound => placeholder(config, "404", "Page not found").map(Some),
        PageView::Unpublished => {
            placeholder(config, "Coming Soon", "This page is not yet available").map(Some)
        }
        PageView::Published(page) => render_document(page, config, products).map(Some),
    }
}

fn placeholder(config: &SiteConfig, heading: &str, message: &str) -> Result<String> {
    let mut head = DocumentHead::new();
    apply_theme(&config.theme, &mut head);
    apply_seo(&config.seo, &mut head);

    let mut body = Vec::new();
    writeln!(body, "<section class=\"page-placeholder\">")?;
    writeln!(body, "<h1>{}</h1>", heading)?;
    writeln!(body, "<p>{}</p>", message)?;
    writeln!(body, "</section>")?;

    assemble(&head, &body)
}

fn assemble(head: &DocumentHead, body: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    writeln!(buf, "<!DOCTYPE html>")?;
    writeln!(buf, "<html lang=\"en\">")?;
    writeln!(buf, "<head>")?;
    writeln!(buf, "<meta charset=\"utf-8\" />")?;
    writeln!(
        buf,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />"
    )?;
    head.write_html(&mut buf)?;
    writeln!(buf, "</head>")?;
    writeln!(buf, "<body>")?;
    writeln!(buf, "<main>")?;
    buf.write_all(body)?;
    writeln!(buf, "</main>")?;
    writeln!(buf, "</body>")?;
    writeln!(buf, "</html>")?;

    // The writers only ever emit UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
