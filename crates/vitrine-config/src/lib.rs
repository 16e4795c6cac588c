/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Site configuration aggregation for Vitrine.
 */

//! Site configuration aggregation.
//!
//! Site-wide presentation is derived from a sparse set of independently
//! stored configuration records (`key` → serialized JSON value). This crate
//! merges those records into one strongly typed [`SiteConfig`] with safe
//! fallbacks: every recognized key is always present in the aggregate, each
//! either the record's parsed value or the key's default.
//!
//! # Design
//!
//! - [`SettingKey`]: the closed, enumerable key set
//! - [`aggregate`]: a pure `(defaults, records) -> SiteConfig` reducer,
//!   independent of any fetch or caching mechanism
//! - [`ConfigState`]: distinguishes "not fetched yet" from "fetched and
//!   possibly empty", so dependents can suspend instead of applying
//!   default-only state to global presentation
//!
//! A record that fails to deserialize is logged and treated as absent; it
//! never aborts aggregation of sibling keys.

mod aggregate;
mod keys;
mod state;
mod types;

pub use aggregate::aggregate;
pub use keys::{SettingKey, SettingKeyError};
pub use state::ConfigState;
pub use types::{
    ContactConfig, FeatureHighlight, FeaturesConfig, HeroConfig, SeoConfig, SettingRecord,
    SiteConfig, SocialConfig, StoreConfig, ThemeConfig,
};
