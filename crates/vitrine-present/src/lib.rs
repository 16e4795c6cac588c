/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Presentation sinks and synchronizers for Vitrine.
 */

//! Projection of aggregated configuration onto document presentation state.
//!
//! The style-variable store and document metadata tags are singleton,
//! mutable state shared by everything rendered into a document. This crate
//! models that state as an explicit [`PresentationSink`] with idempotent
//! upsert operations, injected into two synchronizers:
//!
//! - [`apply_theme`]: theme config → style variables (`--theme-*`,
//!   `--font-main`)
//! - [`apply_seo`]: site-wide SEO config → document title, meta tags,
//!   favicon link
//!
//! Per-page metadata overrides layer on top via [`apply_page_meta`]; the
//! page wins wherever it provides a value, and site-wide values survive
//! wherever it does not.
//!
//! All operations diff before writing, so re-running a synchronizer with
//! unchanged input mutates nothing and re-renders stay cheap.

mod head;
mod metadata;
mod sink;
mod theme;

pub use head::DocumentHead;
pub use metadata::{DEFAULT_TITLE, apply_page_meta, apply_seo};
pub use sink::{MetaAttr, PresentationSink};
pub use theme::{apply_theme, font_stack};
