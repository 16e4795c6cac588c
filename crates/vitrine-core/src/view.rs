/*
 * view.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The page-load state machine.
//!
//! A page view moves `loading → not-found | unpublished | published`.
//! The terminal states render fixed placeholder content; only `published`
//! proceeds to section dispatch. Nothing leaves `published` without a fresh
//! fetch: navigating to a new slug restarts the machine.

use vitrine_page_types::Page;

/// Where a page load currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageView {
    /// The fetch has not resolved yet; dependents suspend.
    #[default]
    Loading,
    /// The slug resolves to no page. Distinct from a fetch failure.
    NotFound,
    /// The page exists but is not published; visitors see a fixed
    /// placeholder, never the section list.
    Unpublished,
    /// The page is live and ready for section dispatch.
    Published(Page),
}

impl PageView {
    /// Classify a resolved fetch.
    pub fn from_fetch(result: Option<Page>) -> PageView {
        match result {
            None => PageView::NotFound,
            Some(page) if page.is_published() => PageView::Published(page),
            Some(_) => PageView::Unpublished,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageView::Loading)
    }
}

/// Proof that a fetch belongs to a particular navigation.
///
/// Issued by [`PageSession::navigate`]; a resolution carrying a superseded
/// ticket is discarded so a stale response can never clobber the
/// then-current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// The page view for one browsing session, across navigations.
///
/// Single-threaded by design: fetch resolutions arrive on the same cycle
/// that renders, so no locking is involved, only generation bookkeeping.
#[derive(Debug, Default)]
pub struct PageSession {
    slug: String,
    generation: u64,
    view: PageView,
}

impl PageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin loading `slug`, superseding any in-flight fetch.
    pub fn navigate(&mut self, slug: &str) -> FetchTicket {
        self.slug = slug.to_string();
        self.generation += 1;
        self.view = PageView::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a resolved fetch if its ticket is still current.
    ///
    /// Returns `false` when the result was stale and discarded.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Option<Page>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(slug = %self.slug, "discarding superseded page fetch");
            return false;
        }
        self.view = PageView::from_fetch(result);
        true
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }
}
