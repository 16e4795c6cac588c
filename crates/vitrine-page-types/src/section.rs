/*
 * section.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Typed content sections.
//!
//! A page body is an ordered list of sections. Each section kind carries its
//! own payload schema, discriminated by the `type` field in the serialized
//! form. The set of kinds is closed and known at build time; anything else
//! (or a payload that does not match its declared kind) deserializes to
//! [`Section::Unknown`], which renderers treat as empty. This is the
//! forward-compatibility path for old binaries reading newer page data.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One content block of a page.
///
/// `Serialize` produces the `{"type": "...", "id": "...", ...}` shape the
/// page store uses. `Deserialize` is hand-written so that a bad element
/// degrades to [`Section::Unknown`] instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Hero(HeroSection),
    About(AboutSection),
    Features(FeaturesSection),
    Products(ProductsSection),
    Testimonials(TestimonialsSection),
    Gallery(GallerySection),
    Contact(ContactSection),
    Cta(CtaSection),
    Text(TextSection),
    Video(VideoSection),
    Spacer(SpacerSection),

    /// An unrecognized or malformed section.
    ///
    /// `kind` preserves the original discriminant for diagnostics. The
    /// payload is not preserved; this engine never writes back pages it did
    /// not author.
    Unknown { id: String, kind: String },
}

impl Section {
    /// Stable identity of the section within its page.
    ///
    /// Unrelated to section semantics; used for ordering-stable keys.
    pub fn id(&self) -> &str {
        match self {
            Section::Hero(s) => &s.id,
            Section::About(s) => &s.id,
            Section::Features(s) => &s.id,
            Section::Products(s) => &s.id,
            Section::Testimonials(s) => &s.id,
            Section::Gallery(s) => &s.id,
            Section::Contact(s) => &s.id,
            Section::Cta(s) => &s.id,
            Section::Text(s) => &s.id,
            Section::Video(s) => &s.id,
            Section::Spacer(s) => &s.id,
            Section::Unknown { id, .. } => id,
        }
    }

    /// The discriminant tag as it appears in serialized form.
    pub fn kind(&self) -> &str {
        match self {
            Section::Hero(_) => "hero",
            Section::About(_) => "about",
            Section::Features(_) => "features",
            Section::Products(_) => "products",
            Section::Testimonials(_) => "testimonials",
            Section::Gallery(_) => "gallery",
            Section::Contact(_) => "contact",
            Section::Cta(_) => "cta",
            Section::Text(_) => "text",
            Section::Video(_) => "video",
            Section::Spacer(_) => "spacer",
            Section::Unknown { kind, .. } => kind,
        }
    }

    /// Build a section from a raw JSON value, never failing.
    ///
    /// Unrecognized discriminants and payloads that do not match their
    /// declared kind both produce [`Section::Unknown`].
    pub fn from_value(value: Value) -> Section {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match kind.as_str() {
            "hero" => serde_json::from_value(value).map(Section::Hero),
            "about" => serde_json::from_value(value).map(Section::About),
            "features" => serde_json::from_value(value).map(Section::Features),
            "products" => serde_json::from_value(value).map(Section::Products),
            "testimonials" => serde_json::from_value(value).map(Section::Testimonials),
            "gallery" => serde_json::from_value(value).map(Section::Gallery),
            "contact" => serde_json::from_value(value).map(Section::Contact),
            "cta" => serde_json::from_value(value).map(Section::Cta),
            "text" => serde_json::from_value(value).map(Section::Text),
            "video" => serde_json::from_value(value).map(Section::Video),
            "spacer" => serde_json::from_value(value).map(Section::Spacer),
            _ => return Section::Unknown { id, kind },
        };

        parsed.unwrap_or(Section::Unknown { id, kind })
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Section::from_value(value))
    }
}

/// Horizontal text alignment used by several sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Hero background kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroBackground {
    #[default]
    Image,
    Gradient,
    Video,
}

/// Hero vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroHeight {
    Small,
    Medium,
    #[default]
    Large,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_image: String,
    pub background_type: HeroBackground,
    pub background_video: Option<String>,
    pub overlay: bool,
    pub overlay_opacity: f64,
    pub overlay_color: String,
    pub text_alignment: Alignment,
    pub height: HeroHeight,
    pub show_scroll_indicator: bool,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            cta_text: String::new(),
            cta_link: String::new(),
            background_image: String::new(),
            background_type: HeroBackground::default(),
            background_video: None,
            overlay: false,
            overlay_opacity: 0.5,
            overlay_color: "#000000".to_string(),
            text_alignment: Alignment::default(),
            height: HeroHeight::default(),
            show_scroll_indicator: false,
        }
    }
}

/// Which side the about image sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub image_position: ImagePosition,
    pub features: Vec<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeaturesLayout {
    #[default]
    Grid,
    List,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub layout: FeaturesLayout,
    pub columns: u32,
    pub items: Vec<FeatureItem>,
    pub background_color: Option<String>,
}

impl Default for FeaturesSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            layout: FeaturesLayout::default(),
            columns: 3,
            items: Vec::new(),
            background_color: None,
        }
    }
}

/// How a products section chooses its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductDisplay {
    #[default]
    Featured,
    New,
    Category,
    Manual,
}

/// A query descriptor: how to fetch products, not the products themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub display_type: ProductDisplay,
    pub category_id: Option<String>,
    /// Explicit product selection for `manual` display.
    ///
    /// Part of the stored schema but not consulted when building the fetch,
    /// which only honors featured/category/limit.
    pub product_ids: Vec<String>,
    pub limit: usize,
    pub columns: u32,
    pub show_price: bool,
    pub show_add_to_cart: bool,
    pub background_color: Option<String>,
}

impl Default for ProductsSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            display_type: ProductDisplay::default(),
            category_id: None,
            product_ids: Vec::new(),
            limit: 4,
            columns: 4,
            show_price: true,
            show_add_to_cart: true,
            background_color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialsLayout {
    #[default]
    Grid,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub layout: TestimonialsLayout,
    pub items: Vec<Testimonial>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Masonry,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub layout: GalleryLayout,
    pub columns: u32,
    pub images: Vec<GalleryImage>,
    pub background_color: Option<String>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            layout: GalleryLayout::default(),
            columns: 3,
            images: Vec::new(),
            background_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub show_form: bool,
    pub show_info: bool,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub show_map: bool,
    pub map_url: String,
    pub social_links: bool,
    pub background_color: Option<String>,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            show_form: true,
            show_info: true,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            show_map: false,
            map_url: String::new(),
            social_links: false,
            background_color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
}

/// Call-to-action background kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaBackground {
    #[default]
    Solid,
    Gradient,
    Image,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub button_style: ButtonStyle,
    pub background_type: CtaBackground,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub text_alignment: Alignment,
}

/// Content width cap for text sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxWidth {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSection {
    pub id: String,
    /// Raw HTML, emitted verbatim.
    pub content: String,
    pub alignment: Alignment,
    pub max_width: MaxWidth,
    pub background_color: Option<String>,
}

/// Where a video is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    #[default]
    Youtube,
    Vimeo,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSection {
    pub id: String,
    pub title: Option<String>,
    pub video_url: String,
    pub video_type: VideoProvider,
    pub thumbnail: Option<String>,
    pub autoplay: bool,
    pub r#loop: bool,
    pub controls: bool,
    pub background_color: Option<String>,
}

impl Default for VideoSection {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: None,
            video_url: String::new(),
            video_type: VideoProvider::default(),
            thumbnail: None,
            autoplay: false,
            r#loop: false,
            controls: true,
            background_color: None,
        }
    }
}

/// Fixed vertical gap between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerHeight {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerSection {
    pub id: String,
    pub height: SpacerHeight,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_hero_roundtrip() {
        let section = Section::Hero(HeroSection {
            id: "s1".into(),
            title: "Welcome".into(),
            background_type: HeroBackground::Video,
            background_video: Some("https://cdn.example.com/bg.mp4".into()),
            overlay: true,
            ..HeroSection::default()
        });

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "hero");
        assert_eq!(value["background_type"], "video");

        let back: Section = serde_json::from_value(value).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_each_known_kind_dispatches() {
        let kinds = [
            "hero",
            "about",
            "features",
            "products",
            "testimonials",
            "gallery",
            "contact",
            "cta",
            "text",
            "video",
            "spacer",
        ];
        for kind in kinds {
            let section = Section::from_value(json!({ "type": kind, "id": "x" }));
            assert_eq!(section.kind(), kind, "kind {kind} should parse to itself");
            assert!(
                !matches!(section, Section::Unknown { .. }),
                "kind {kind} should not be Unknown"
            );
            assert_eq!(section.id(), "x");
        }
    }

    #[test]
    fn test_unknown_kind_degrades() {
        let section = Section::from_value(json!({ "type": "countdown", "id": "c1" }));
        assert_eq!(
            section,
            Section::Unknown {
                id: "c1".into(),
                kind: "countdown".into()
            }
        );
    }

    #[test]
    fn test_malformed_payload_degrades() {
        // columns must be a number
        let section = Section::from_value(json!({
            "type": "gallery",
            "id": "g1",
            "columns": "three"
        }));
        assert!(matches!(section, Section::Unknown { .. }));
    }

    #[test]
    fn test_sparse_payload_fills_defaults() {
        let section = Section::from_value(json!({ "type": "products", "id": "p1" }));
        match section {
            Section::Products(p) => {
                assert_eq!(p.limit, 4);
                assert_eq!(p.columns, 4);
                assert!(p.show_price);
                assert!(p.product_ids.is_empty());
            }
            other => panic!("expected products section, got {other:?}"),
        }
    }

    #[test]
    fn test_section_list_preserves_order_and_bad_elements() {
        let sections: Vec<Section> = serde_json::from_value(json!([
            { "type": "hero", "id": "a" },
            { "type": "mystery", "id": "b" },
            { "type": "spacer", "id": "c", "height": "large" }
        ]))
        .unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].id(), "a");
        assert!(matches!(sections[1], Section::Unknown { .. }));
        assert!(matches!(
            sections[2],
            Section::Spacer(SpacerSection {
                height: SpacerHeight::Large,
                ..
            })
        ));
    }

    #[test]
    fn test_video_loop_field_name() {
        let section = Section::from_value(json!({
            "type": "video",
            "id": "v1",
            "video_url": "https://vimeo.com/98765",
            "video_type": "vimeo",
            "loop": true
        }));
        match section {
            Section::Video(v) => {
                assert!(v.r#loop);
                assert_eq!(v.video_type, VideoProvider::Vimeo);
            }
            other => panic!("expected video section, got {other:?}"),
        }
    }
}
