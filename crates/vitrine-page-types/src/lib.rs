/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Data model for Vitrine storefront pages.
 *
 * This crate provides pure data type definitions for pages, their typed
 * content sections, and the product catalog types referenced by the
 * products section. It has minimal dependencies (serde, serde_json) and
 * can be used by any crate that needs to work with page structures.
 */

pub mod page;
pub mod product;
pub mod section;

// Re-export commonly used types at the crate root
pub use page::{Page, PageStatus, PageTemplate};
pub use product::{Product, ProductQuery};
pub use section::{
    AboutSection, Alignment, ButtonStyle, ContactSection, CtaBackground, CtaSection, FeatureItem,
    FeaturesLayout, FeaturesSection, GalleryImage, GalleryLayout, GallerySection, HeroBackground,
    HeroHeight, HeroSection, ImagePosition, MaxWidth, ProductDisplay, ProductsSection, Section,
    SpacerHeight, SpacerSection, Testimonial, TestimonialsLayout, TestimonialsSection, TextSection,
    VideoProvider, VideoSection,
};
