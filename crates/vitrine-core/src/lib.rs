/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Core composition and rendering pipeline for Vitrine.
 */

//! Core rendering infrastructure for Vitrine.
//!
//! This crate turns a page definition plus the aggregated site
//! configuration into a complete HTML document:
//!
//! - [`write_section`] dispatches each typed section to its renderer by
//!   discriminant; unknown kinds render nothing.
//! - [`write_page_body`] renders the ordered section list, isolating
//!   per-section failures so one bad section never takes down its siblings.
//! - [`PageView`] / [`PageSession`] model the page-load state machine
//!   (`loading → not-found | unpublished | published`) and discard stale
//!   fetch results when navigation supersedes them.
//! - [`render_view`] assembles the final document, gated on configuration
//!   readiness so defaults are never flashed into the head.
//!
//! The data layer stays behind the [`SiteData`]/[`ProductSource`] traits;
//! this crate never fetches anything itself.

pub mod derive;
pub mod error;
pub mod render;
pub mod source;
pub mod view;
pub mod writer;

pub use error::{DataError, RenderError, Result};
pub use render::{render_document, render_view};
pub use source::{ProductSource, SiteData};
pub use view::{FetchTicket, PageSession, PageView};
pub use writer::{RenderContext, write_page_body, write_section};
