/*
 * derive.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pure derivation rules used by the section renderers.
//!
//! Everything here maps declarative payload fields onto concrete CSS/URL
//! values. None of it validates its input; malformed URLs degrade to a
//! best-effort guess rather than failing, and unexpected sizes fall back to
//! a sane track count.

use vitrine_page_types::{
    CtaBackground, CtaSection, HeroBackground, HeroHeight, HeroSection, MaxWidth, SpacerHeight,
};

/// Fallback gradient start color when a section has none configured.
pub const GRADIENT_START_FALLBACK: &str = "#667eea";

/// Fallback gradient end color when a section has none configured.
pub const GRADIENT_END_FALLBACK: &str = "#764ba2";

/// Alpha suffix appended to a base color to form the gradient's second stop.
const GRADIENT_ALPHA_SUFFIX: &str = "80";

/// Build the CSS gradient for a configured base color.
///
/// The second stop is the base color with a fixed alpha suffix appended;
/// with no base color, a fixed fallback pair is used instead.
pub fn gradient_css(base: Option<&str>) -> String {
    let start = base.unwrap_or(GRADIENT_START_FALLBACK);
    let end = match base {
        Some(color) => format!("{color}{GRADIENT_ALPHA_SUFFIX}"),
        None => GRADIENT_END_FALLBACK.to_string(),
    };
    format!("linear-gradient(135deg, {start} 0%, {end} 100%)")
}

/// CSS declaration for a CTA section's background.
pub fn cta_background_style(cta: &CtaSection) -> String {
    match cta.background_type {
        CtaBackground::Image => match cta.background_image.as_deref().filter(|s| !s.is_empty()) {
            Some(url) => format!("background-image: url({url})"),
            None => String::new(),
        },
        CtaBackground::Gradient => {
            format!("background: {}", gradient_css(cta.background_color.as_deref()))
        }
        CtaBackground::Solid => match cta.background_color.as_deref() {
            Some(color) => format!("background-color: {color}"),
            None => String::new(),
        },
    }
}

/// The background layer a hero section paints, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroBackdrop {
    Image(String),
    Video(String),
    Gradient(String),
}

/// Resolve a hero's background declaration to a concrete backdrop.
///
/// An image background without a URL (and likewise for video) paints
/// nothing; the overlay is only applied when a backdrop exists.
pub fn hero_backdrop(hero: &HeroSection) -> Option<HeroBackdrop> {
    match hero.background_type {
        HeroBackground::Image => {
            if hero.background_image.is_empty() {
                None
            } else {
                Some(HeroBackdrop::Image(hero.background_image.clone()))
            }
        }
        HeroBackground::Video => hero
            .background_video
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|url| HeroBackdrop::Video(url.to_string())),
        HeroBackground::Gradient => Some(HeroBackdrop::Gradient(gradient_css(None))),
    }
}

/// Hero vertical extent in CSS.
pub fn hero_min_height(height: HeroHeight) -> &'static str {
    match height {
        HeroHeight::Small => "300px",
        HeroHeight::Medium => "400px",
        HeroHeight::Large => "600px",
        HeroHeight::Full => "100vh",
    }
}

/// Spacer extent in CSS.
pub fn spacer_height(height: SpacerHeight) -> &'static str {
    match height {
        SpacerHeight::Small => "3rem",
        SpacerHeight::Medium => "6rem",
        SpacerHeight::Large => "12rem",
    }
}

/// Text section width cap in CSS, `None` meaning unconstrained.
pub fn text_max_width(width: MaxWidth) -> Option<&'static str> {
    match width {
        MaxWidth::Small => Some("42rem"),
        MaxWidth::Medium => Some("56rem"),
        MaxWidth::Large => Some("72rem"),
        MaxWidth::Full => None,
    }
}

/// CSS grid track list for an n-column section grid.
///
/// Tolerates any count; zero (from malformed data) falls back to one
/// column rather than producing an invalid track list.
pub fn grid_columns(columns: u32) -> String {
    let count = columns.max(1);
    format!("repeat({count}, minmax(0, 1fr))")
}

/// Derive the embeddable player URL for a YouTube video.
///
/// The identifier is taken from a `v=` query parameter when present,
/// otherwise from the URL's final path segment. No validation is performed.
pub fn youtube_embed_url(url: &str) -> String {
    let id = match url.split_once("v=") {
        Some((_, rest)) => rest,
        None => final_segment(url),
    };
    format!("https://www.youtube.com/embed/{id}")
}

/// Derive the embeddable player URL for a Vimeo video: always the final
/// path segment.
pub fn vimeo_embed_url(url: &str) -> String {
    format!("https://player.vimeo.com/video/{}", final_segment(url))
}

fn final_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
