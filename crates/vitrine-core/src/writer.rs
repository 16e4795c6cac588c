/*
 * writer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML writers for the section renderer set.
 */

//! Section dispatch and per-variant HTML rendering.
//!
//! The writer walks the page's section list and routes each section to the
//! renderer matching its discriminant. Unknown kinds write nothing. Section
//! order is the page definition's order; the dispatcher never reorders,
//! filters, or deduplicates.

use std::io::{self, Write};

use vitrine_config::SiteConfig;
use vitrine_page_types::{
    AboutSection, ButtonStyle, ContactSection, CtaSection, FeaturesSection, GallerySection,
    HeroSection, Product, ProductDisplay, ProductQuery, ProductsSection, Section, SpacerSection,
    TestimonialsSection, TextSection, VideoProvider, VideoSection,
};

use crate::derive::{
    HeroBackdrop, cta_background_style, grid_columns, hero_backdrop, hero_min_height,
    spacer_height, text_max_width, vimeo_embed_url, youtube_embed_url,
};
use crate::error::Result;
use crate::source::ProductSource;

/// Everything a section renderer may read: the aggregated site
/// configuration and the product source for query-descriptor sections.
///
/// Renderers hold read-only derived views; nothing here is mutated during
/// rendering.
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub products: &'a dyn ProductSource,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, products: &'a dyn ProductSource) -> Self {
        Self { config, products }
    }
}

/// Render the ordered section list of a page body.
///
/// Each section renders into its own buffer; a failing section is logged
/// and dropped so siblings are unaffected.
pub fn write_page_body<W: Write>(
    sections: &[Section],
    ctx: &RenderContext,
    buf: &mut W,
) -> io::Result<()> {
    for section in sections {
        let mut section_buf = Vec::new();
        match write_section(section, ctx, &mut section_buf) {
            Ok(()) => buf.write_all(&section_buf)?,
            Err(error) => {
                tracing::error!(
                    section = %section.id(),
                    kind = %section.kind(),
                    %error,
                    "section failed to render, skipping"
                );
            }
        }
    }
    Ok(())
}

/// Route one section to the renderer registered for its discriminant.
///
/// Exhaustive over the known kinds; `Unknown` renders nothing and never
/// raises, so newer data passes through old binaries harmlessly.
pub fn write_section<W: Write>(section: &Section, ctx: &RenderContext, buf: &mut W) -> Result<()> {
    match section {
        Section::Hero(hero) => write_hero(hero, ctx, buf)?,
        Section::About(about) => write_about(about, buf)?,
        Section::Features(features) => write_features(features, buf)?,
        Section::Products(products) => write_products(products, ctx, buf)?,
        Section::Testimonials(testimonials) => write_testimonials(testimonials, buf)?,
        Section::Gallery(gallery) => write_gallery(gallery, buf)?,
        Section::Contact(contact) => write_contact(contact, ctx, buf)?,
        Section::Cta(cta) => write_cta(cta, buf)?,
        Section::Text(text) => write_text(text, buf)?,
        Section::Video(video) => write_video(video, buf)?,
        Section::Spacer(spacer) => write_spacer(spacer, buf)?,
        Section::Unknown { id, kind } => {
            tracing::debug!(section = %id, %kind, "skipping unrecognized section kind");
        }
    }
    Ok(())
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Write the standard section header (eyebrow subtitle + title).
fn write_heading<W: Write>(title: &str, subtitle: &str, buf: &mut W) -> io::Result<()> {
    if title.is_empty() && subtitle.is_empty() {
        return Ok(());
    }
    writeln!(buf, "<header class=\"section-heading\">")?;
    if !subtitle.is_empty() {
        writeln!(buf, "<p class=\"eyebrow\">{}</p>", escape_html(subtitle))?;
    }
    if !title.is_empty() {
        writeln!(buf, "<h2>{}</h2>", escape_html(title))?;
    }
    writeln!(buf, "</header>")
}

/// Optional `background-color` style attribute shared by most sections.
fn background_attr(color: &Option<String>) -> String {
    match color.as_deref().filter(|c| !c.is_empty()) {
        Some(color) => format!(" style=\"background-color: {}\"", escape_html(color)),
        None => String::new(),
    }
}

fn write_hero<W: Write>(hero: &HeroSection, ctx: &RenderContext, buf: &mut W) -> io::Result<()> {
    // Site-wide hero defaults fill in whatever the section leaves blank.
    let defaults = &ctx.config.hero;
    let title = if hero.title.is_empty() { &defaults.title } else { &hero.title };
    let subtitle = if hero.subtitle.is_empty() { &defaults.subtitle } else { &hero.subtitle };
    let cta_text = if hero.cta_text.is_empty() { &defaults.cta_text } else { &hero.cta_text };
    let cta_link = if hero.cta_link.is_empty() { &defaults.cta_link } else { &hero.cta_link };

    writeln!(
        buf,
        "<section class=\"section-hero\" style=\"min-height: {}\">",
        hero_min_height(hero.height)
    )?;

    let backdrop = hero_backdrop(hero);
    match &backdrop {
        Some(HeroBackdrop::Image(url)) => {
            writeln!(
                buf,
                "<div class=\"hero-backdrop\" style=\"background-image: url({})\"></div>",
                escape_html(url)
            )?;
        }
        Some(HeroBackdrop::Video(url)) => {
            writeln!(
                buf,
                "<video class=\"hero-backdrop\" autoplay loop muted playsinline>"
            )?;
            writeln!(buf, "<source src=\"{}\" type=\"video/mp4\" />", escape_html(url))?;
            writeln!(buf, "</video>")?;
        }
        Some(HeroBackdrop::Gradient(css)) => {
            writeln!(
                buf,
                "<div class=\"hero-backdrop\" style=\"background: {}\"></div>",
                css
            )?;
        }
        None => {}
    }

    // Overlay only over an actual backdrop.
    if hero.overlay && backdrop.is_some() {
        writeln!(
            buf,
            "<div class=\"hero-overlay\" style=\"background-color: {}; opacity: {}\"></div>",
            escape_html(&hero.overlay_color),
            hero.overlay_opacity
        )?;
    }

    writeln!(
        buf,
        "<div class=\"hero-content\" style=\"text-align: {}\">",
        hero.text_alignment.css()
    )?;
    writeln!(buf, "<h1>{}</h1>", escape_html(title))?;
    if !subtitle.is_empty() {
        writeln!(buf, "<p class=\"hero-subtitle\">{}</p>", escape_html(subtitle))?;
    }
    if !cta_text.is_empty() {
        writeln!(
            buf,
            "<a class=\"button button-primary\" href=\"{}\">{}</a>",
            escape_html(cta_link),
            escape_html(cta_text)
        )?;
    }
    writeln!(buf, "</div>")?;

    if hero.show_scroll_indicator {
        writeln!(buf, "<span class=\"hero-scroll-indicator\"></span>")?;
    }

    writeln!(buf, "</section>")
}

fn write_about<W: Write>(about: &AboutSection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-about image-{}\"{}>",
        match about.image_position {
            vitrine_page_types::ImagePosition::Left => "left",
            vitrine_page_types::ImagePosition::Right => "right",
        },
        background_attr(&about.background_color)
    )?;

    if !about.image.is_empty() {
        writeln!(
            buf,
            "<img class=\"about-image\" src=\"{}\" alt=\"{}\" />",
            escape_html(&about.image),
            escape_html(&about.title)
        )?;
    }

    writeln!(buf, "<div class=\"about-content\">")?;
    write_heading(&about.title, &about.subtitle, buf)?;
    if !about.description.is_empty() {
        writeln!(buf, "<p>{}</p>", escape_html(&about.description))?;
    }
    if !about.features.is_empty() {
        writeln!(buf, "<ul class=\"about-features\">")?;
        for feature in &about.features {
            writeln!(buf, "<li>{}</li>", escape_html(feature))?;
        }
        writeln!(buf, "</ul>")?;
    }
    if let Some(text) = about.button_text.as_deref().filter(|t| !t.is_empty()) {
        let link = about.button_link.as_deref().unwrap_or("#");
        writeln!(
            buf,
            "<a class=\"button button-primary\" href=\"{}\">{}</a>",
            escape_html(link),
            escape_html(text)
        )?;
    }
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")
}

fn write_features<W: Write>(features: &FeaturesSection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-features\"{}>",
        background_attr(&features.background_color)
    )?;
    write_heading(&features.title, &features.subtitle, buf)?;

    writeln!(
        buf,
        "<div class=\"feature-grid\" style=\"grid-template-columns: {}\">",
        grid_columns(features.columns)
    )?;
    for item in &features.items {
        writeln!(buf, "<article class=\"feature-card\">")?;
        if !item.icon.is_empty() {
            writeln!(
                buf,
                "<span class=\"feature-icon\" data-icon=\"{}\"></span>",
                escape_html(&item.icon)
            )?;
        }
        writeln!(buf, "<h3>{}</h3>", escape_html(&item.title))?;
        writeln!(buf, "<p>{}</p>", escape_html(&item.description))?;
        if let Some(link) = item.link.as_deref().filter(|l| !l.is_empty()) {
            writeln!(
                buf,
                "<a class=\"feature-link\" href=\"{}\">Learn more</a>",
                escape_html(link)
            )?;
        }
        writeln!(buf, "</article>")?;
    }
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")
}

/// Build the product fetch from a query descriptor.
///
/// Only featured/category/limit are honored; an explicit `product_ids`
/// selection is not part of the fetch contract.
fn product_query(products: &ProductsSection) -> ProductQuery {
    ProductQuery {
        featured: (products.display_type == ProductDisplay::Featured).then_some(true),
        category: products.category_id.clone(),
        limit: Some(products.limit),
    }
}

fn write_products<W: Write>(
    section: &ProductsSection,
    ctx: &RenderContext,
    buf: &mut W,
) -> Result<()> {
    let fetched = ctx.products.products(&product_query(section))?;

    writeln!(
        buf,
        "<section class=\"section-products\"{}>",
        background_attr(&section.background_color)
    )?;
    write_heading(&section.title, &section.subtitle, buf)?;

    writeln!(
        buf,
        "<div class=\"product-grid\" style=\"grid-template-columns: {}\">",
        grid_columns(section.columns)
    )?;
    for product in fetched.iter().take(section.limit) {
        write_product_card(product, section, &ctx.config.store.currency, buf)?;
    }
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")?;
    Ok(())
}

fn write_product_card<W: Write>(
    product: &Product,
    section: &ProductsSection,
    currency: &str,
    buf: &mut W,
) -> io::Result<()> {
    writeln!(buf, "<article class=\"product-card\">")?;
    writeln!(
        buf,
        "<a href=\"/products/{}\">",
        escape_html(&product.slug)
    )?;
    if let Some(image) = product.primary_image() {
        writeln!(
            buf,
            "<img src=\"{}\" alt=\"{}\" />",
            escape_html(image),
            escape_html(&product.name)
        )?;
    }
    writeln!(buf, "<h3>{}</h3>", escape_html(&product.name))?;
    writeln!(buf, "</a>")?;
    if section.show_price {
        writeln!(
            buf,
            "<p class=\"product-price\">{} {:.2}</p>",
            escape_html(currency),
            product.price
        )?;
    }
    if section.show_add_to_cart {
        writeln!(
            buf,
            "<button class=\"button button-primary\" data-product=\"{}\">Add to Cart</button>",
            escape_html(&product.id)
        )?;
    }
    writeln!(buf, "</article>")
}

fn write_testimonials<W: Write>(testimonials: &TestimonialsSection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-testimonials\"{}>",
        background_attr(&testimonials.background_color)
    )?;
    write_heading(&testimonials.title, &testimonials.subtitle, buf)?;

    writeln!(buf, "<div class=\"testimonial-grid\">")?;
    for item in &testimonials.items {
        let filled = usize::from(item.rating.min(5));
        writeln!(buf, "<blockquote class=\"testimonial\">")?;
        writeln!(
            buf,
            "<span class=\"rating\" aria-label=\"{} out of 5\">{}{}</span>",
            filled,
            "\u{2605}".repeat(filled),
            "\u{2606}".repeat(5 - filled)
        )?;
        writeln!(buf, "<p>{}</p>", escape_html(&item.text))?;
        writeln!(buf, "<footer>")?;
        if !item.avatar.is_empty() {
            writeln!(
                buf,
                "<img class=\"avatar\" src=\"{}\" alt=\"{}\" />",
                escape_html(&item.avatar),
                escape_html(&item.name)
            )?;
        }
        writeln!(buf, "<cite>{}</cite>", escape_html(&item.name))?;
        if !item.role.is_empty() {
            writeln!(buf, "<span class=\"role\">{}</span>", escape_html(&item.role))?;
        }
        writeln!(buf, "</footer>")?;
        writeln!(buf, "</blockquote>")?;
    }
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")
}

fn write_gallery<W: Write>(gallery: &GallerySection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-gallery\"{}>",
        background_attr(&gallery.background_color)
    )?;
    write_heading(&gallery.title, &gallery.subtitle, buf)?;

    writeln!(
        buf,
        "<div class=\"gallery-grid\" style=\"grid-template-columns: {}\">",
        grid_columns(gallery.columns)
    )?;
    for image in &gallery.images {
        writeln!(buf, "<figure class=\"gallery-item\">")?;
        let img = format!(
            "<img src=\"{}\" alt=\"{}\" />",
            escape_html(&image.url),
            escape_html(&image.alt)
        );
        match image.link.as_deref().filter(|l| !l.is_empty()) {
            Some(link) => writeln!(buf, "<a href=\"{}\">{}</a>", escape_html(link), img)?,
            None => writeln!(buf, "{}", img)?,
        }
        if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
            writeln!(buf, "<figcaption>{}</figcaption>", escape_html(caption))?;
        }
        writeln!(buf, "</figure>")?;
    }
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")
}

fn write_contact<W: Write>(
    contact: &ContactSection,
    ctx: &RenderContext,
    buf: &mut W,
) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-contact\"{}>",
        background_attr(&contact.background_color)
    )?;
    write_heading(&contact.title, &contact.subtitle, buf)?;

    if contact.show_info {
        writeln!(buf, "<address class=\"contact-info\">")?;
        for (label, value) in [
            ("Email", &contact.email),
            ("Phone", &contact.phone),
            ("Address", &contact.address),
        ] {
            if !value.is_empty() {
                writeln!(
                    buf,
                    "<p><strong>{}</strong> {}</p>",
                    label,
                    escape_html(value)
                )?;
            }
        }
        writeln!(buf, "</address>")?;

        if contact.show_map && !contact.map_url.is_empty() {
            writeln!(
                buf,
                "<iframe class=\"contact-map\" src=\"{}\" loading=\"lazy\"></iframe>",
                escape_html(&contact.map_url)
            )?;
        }
    }

    if contact.show_form {
        writeln!(buf, "<form class=\"contact-form\" method=\"post\">")?;
        writeln!(buf, "<input name=\"name\" placeholder=\"Your Name\" required />")?;
        writeln!(
            buf,
            "<input name=\"email\" type=\"email\" placeholder=\"Your Email\" required />"
        )?;
        writeln!(buf, "<input name=\"subject\" placeholder=\"Subject\" required />")?;
        writeln!(
            buf,
            "<textarea name=\"message\" rows=\"5\" placeholder=\"Your Message\" required></textarea>"
        )?;
        writeln!(
            buf,
            "<button type=\"submit\" class=\"button button-primary\">Send Message</button>"
        )?;
        writeln!(buf, "</form>")?;
    }

    if contact.social_links && !ctx.config.social.is_empty() {
        writeln!(buf, "<nav class=\"social-links\">")?;
        for (platform, url) in &ctx.config.social {
            if !url.is_empty() {
                writeln!(
                    buf,
                    "<a href=\"{}\" rel=\"noopener\">{}</a>",
                    escape_html(url),
                    escape_html(platform)
                )?;
            }
        }
        writeln!(buf, "</nav>")?;
    }

    writeln!(buf, "</section>")
}

fn write_cta<W: Write>(cta: &CtaSection, buf: &mut W) -> io::Result<()> {
    let background = cta_background_style(cta);
    write!(buf, "<section class=\"section-cta\"")?;
    if !background.is_empty() {
        write!(buf, " style=\"{}\"", background)?;
    }
    writeln!(buf, ">")?;

    writeln!(
        buf,
        "<div class=\"cta-content\" style=\"text-align: {}\">",
        cta.text_alignment.css()
    )?;
    writeln!(buf, "<h2>{}</h2>", escape_html(&cta.title))?;
    if !cta.description.is_empty() {
        writeln!(buf, "<p>{}</p>", escape_html(&cta.description))?;
    }
    if !cta.button_text.is_empty() {
        let class = match cta.button_style {
            ButtonStyle::Primary => "button-primary",
            ButtonStyle::Secondary => "button-secondary",
            ButtonStyle::Outline => "button-outline",
        };
        writeln!(
            buf,
            "<a class=\"button {}\" href=\"{}\">{}</a>",
            class,
            escape_html(&cta.button_link),
            escape_html(&cta.button_text)
        )?;
    }
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")
}

fn write_text<W: Write>(text: &TextSection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-text\"{}>",
        background_attr(&text.background_color)
    )?;
    let width = match text_max_width(text.max_width) {
        Some(width) => format!("max-width: {}; ", width),
        None => String::new(),
    };
    writeln!(
        buf,
        "<div class=\"text-content\" style=\"{}text-align: {}\">",
        width,
        text.alignment.css()
    )?;
    // Authored rich text; emitted verbatim by contract.
    writeln!(buf, "{}", text.content)?;
    writeln!(buf, "</div>")?;
    writeln!(buf, "</section>")
}

fn write_video<W: Write>(video: &VideoSection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<section class=\"section-video\"{}>",
        background_attr(&video.background_color)
    )?;
    if let Some(title) = video.title.as_deref().filter(|t| !t.is_empty()) {
        writeln!(buf, "<h2>{}</h2>", escape_html(title))?;
    }

    match video.video_type {
        VideoProvider::File => {
            write!(buf, "<video src=\"{}\"", escape_html(&video.video_url))?;
            if video.controls {
                write!(buf, " controls")?;
            }
            if video.autoplay {
                write!(buf, " autoplay")?;
            }
            if video.r#loop {
                write!(buf, " loop")?;
            }
            writeln!(buf, "></video>")?;
        }
        VideoProvider::Youtube | VideoProvider::Vimeo => {
            let embed = match video.video_type {
                VideoProvider::Youtube => youtube_embed_url(&video.video_url),
                _ => vimeo_embed_url(&video.video_url),
            };
            writeln!(
                buf,
                "<iframe src=\"{}\" allow=\"autoplay; encrypted-media; picture-in-picture\" allowfullscreen></iframe>",
                escape_html(&embed)
            )?;
        }
    }
    writeln!(buf, "</section>")
}

fn write_spacer<W: Write>(spacer: &SpacerSection, buf: &mut W) -> io::Result<()> {
    writeln!(
        buf,
        "<div class=\"section-spacer\" style=\"height: {}\"></div>",
        spacer_height(spacer.height)
    )
}
