/*
 * types.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-key configuration schemas and the aggregated whole.
//!
//! Validity of individual values (hex colors, length units, font names) is
//! not enforced at this layer; values pass through as stored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A raw configuration record as fetched from the data layer.
///
/// `value` is opaque serialized JSON; its schema depends on `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRecord {
    pub key: String,
    pub value: String,
}

impl SettingRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Store identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub currency: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "My Store".to_string(),
            tagline: String::new(),
            logo: String::new(),
            currency: "KES".to_string(),
        }
    }
}

/// Theme values applied as style variables.
///
/// All free-form strings; classification and application happen in the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub border_radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#1a1a2e".to_string(),
            secondary_color: "#16213e".to_string(),
            accent_color: "#e94560".to_string(),
            font_family: "Inter".to_string(),
            border_radius: "0.5rem".to_string(),
        }
    }
}

/// Site-wide hero defaults, available to renderers that want them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_image: String,
    pub overlay_opacity: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Welcome to our store".to_string(),
            subtitle: String::new(),
            cta_text: "Shop Now".to_string(),
            cta_link: "/products".to_string(),
            background_image: String::new(),
            overlay_opacity: 0.5,
        }
    }
}

/// One site-wide feature highlight (icon + copy).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureHighlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Site-wide feature highlights.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureHighlight>,
}

/// Site-wide SEO defaults. All optional; absent fields leave the document
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub favicon: Option<String>,
}

/// Contact details shown in footers and contact sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub whatsapp: String,
}

/// Social links, keyed by platform name in stored order.
pub type SocialConfig = IndexMap<String, String>;

/// The aggregated site configuration: one typed value per recognized key.
///
/// Invariant: every key is always present. Aggregation substitutes the
/// default for a key whose record is missing or malformed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub store: StoreConfig,
    pub theme: ThemeConfig,
    pub hero: HeroConfig,
    pub features: FeaturesConfig,
    pub seo: SeoConfig,
    pub contact: ContactConfig,
    pub social: SocialConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.font_family, "Inter");
        assert_eq!(theme.border_radius, "0.5rem");
    }

    #[test]
    fn test_seo_default_is_all_absent() {
        let seo = SeoConfig::default();
        assert_eq!(seo, SeoConfig::default());
        assert!(seo.title.is_none());
        assert!(seo.favicon.is_none());
    }

    #[test]
    fn test_sparse_theme_record_fills_defaults() {
        let theme: ThemeConfig = serde_json::from_str(r##"{"primary_color": "#667eea"}"##).unwrap();
        assert_eq!(theme.primary_color, "#667eea");
        assert_eq!(theme.font_family, "Inter");
    }

    #[test]
    fn test_social_preserves_order() {
        let social: SocialConfig = serde_json::from_str(
            r#"{"instagram": "https://instagram.com/x", "facebook": "https://facebook.com/x"}"#,
        )
        .unwrap();
        let platforms: Vec<&str> = social.keys().map(String::as_str).collect();
        assert_eq!(platforms, ["instagram", "facebook"]);
    }
}
